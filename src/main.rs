use anyhow::Result;
use clap::Parser;

mod camera;
mod cli;
mod config;
mod contents;
mod demo;
mod engine;
mod gui;
mod primitives;
mod rendering;
mod scene_graph;
mod window;

use crate::{cli::Cli, config::DemoConfig, demo::DemoState};

fn main() -> Result<()> {
    pretty_env_logger::init();

    let config = DemoConfig::from(Cli::parse());
    log::debug!("{:?}", config);

    let mut demo_state = DemoState::new(&config);

    if config.headless {
        engine::run_headless(&mut demo_state, config.frames);
        return Ok(());
    }

    pollster::block_on(window::run(demo_state))?;

    Ok(())
}
