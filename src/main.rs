fn main() -> anyhow::Result<()> {
    katzenbaum::flow::run()
}
