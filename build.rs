fn main() {
    if std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() == "windows" {
        let res = winres::WindowsResource::new();
        res.compile().expect("Failed to compile Windows resources");
    }
}
