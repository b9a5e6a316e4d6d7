use std::{env, path::PathBuf};

use anyhow::Result;

fn main() -> Result<()> {
    let paths: Vec<PathBuf> = env::args().skip(1).map(PathBuf::from).collect();
    retrodeck::ui::run(paths)
}
