fn main() -> anyhow::Result<()> {
    hskprep_lib::run()
}
