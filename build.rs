use shadow_rs::ShadowBuilder;

fn main() {
    // Git and build metadata shown by `opensalary-bot --version`
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
