fn main() -> anyhow::Result<()> {
    log_scanner::run()
}
