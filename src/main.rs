use generics::Demo;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let stdout = std::io::stdout();
    Demo::default().run(&mut stdout.lock())
}
