fn main() {
    // Capture the current timestamp as the build time
    let now = chrono::Utc::now();

    // Set as environment variables for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    // The footer's copyright line wants just the year
    println!("cargo:rustc-env=BUILD_YEAR={}", now.format("%Y"));

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
