use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Stamped into the startup log line
    let now = Utc::now();
    println!("cargo:rustc-env=BUILD_DATE={}", now.format("%Y-%m-%d %H:%M UTC"));
}
