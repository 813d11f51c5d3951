fn main() -> anyhow::Result<()> {
    ledpanels::run()
}
