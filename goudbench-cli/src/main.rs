fn main() -> anyhow::Result<()> {
    goudbench_cli::run()
}
