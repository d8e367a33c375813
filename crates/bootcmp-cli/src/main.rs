mod command;
mod input;
mod render;
mod schema;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
