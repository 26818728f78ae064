fn main() -> anyhow::Result<()> {
    pmctl::run()
}
