fn main() {
    // The Vision shim only exists on macOS; other platforms compile the
    // stub in src/ocr.rs and need no native code.
    #[cfg(target_os = "macos")]
    {
        cc::Build::new()
            .file("vision/cliplens_vision.m")
            .flag("-fobjc-arc")
            .compile("cliplens_vision");

        println!("cargo:rustc-link-lib=framework=Vision");
        println!("cargo:rustc-link-lib=framework=ImageIO");
        println!("cargo:rustc-link-lib=framework=CoreGraphics");
        println!("cargo:rustc-link-lib=framework=Foundation");
        println!("cargo:rerun-if-changed=vision/cliplens_vision.m");
    }
}
