fn main() {
    slint_build::compile("ui/results.slint").unwrap();
}
