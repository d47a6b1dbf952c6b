use anyhow::{Context, Result};
use log::{debug, info, warn, LevelFilter};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use std::io;
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use vek::Vec3;

use haema_client::config::Setting;
use haema_client::{Look, Player, State};

const CONFIG_PATH: &str = "game.toml";

/// stdin 指令
enum Command {
    Press,
    Release,
    Feed(f64),
    Look(f64, f64),
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "press" => Some(Command::Press),
        "release" => Some(Command::Release),
        "feed" => parts.next()?.parse().ok().map(Command::Feed),
        "look" => {
            let yaw = parts.next()?.parse().ok()?;
            let pitch = parts.next()?.parse().ok()?;
            Some(Command::Look(yaw, pitch))
        }
        "quit" => Some(Command::Quit),
        _ => None,
    }
}

fn init_logging(path: &str) -> Result<()> {
    if Path::new(path).exists() {
        log4rs::init_file(path, Default::default())
            .with_context(|| format!("log4rs 設定錯誤 {}", path))?;
    } else {
        let stdout = ConsoleAppender::builder().build();
        let config = Config::builder()
            .appender(Appender::builder().build("stdout", Box::new(stdout)))
            .build(Root::builder().appender("stdout").build(LevelFilter::Info))?;
        log4rs::init_config(config)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let setting = if Path::new(CONFIG_PATH).exists() {
        Setting::load(CONFIG_PATH)?
    } else {
        Setting::default()
    };
    init_logging(&setting.client.log_config)?;
    if !Path::new(CONFIG_PATH).exists() {
        warn!("找不到 {}，使用預設設定", CONFIG_PATH);
    }

    let mut state = State::new(&setting)?;
    state.blocks_mut().fill(Vec3::new(-32, 63, -32), Vec3::new(32, 63, 32));
    let player = state.spawn_local_player(
        Player::new("local"),
        Vec3::new(0.5, 64.0, 0.5),
        Look::from_angles(0.0, 30.0),
    );
    state.make_vampire(player, 20.0)?;

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || loop {
        let mut buffer = String::new();
        match io::stdin().read_line(&mut buffer) {
            Ok(0) | Err(_) => break,
            Ok(_) => {
                if tx.send(buffer.trim().to_string()).is_err() {
                    break;
                }
            }
        }
    });

    let step = Duration::from_secs_f64(1.0 / setting.client.tps as f64);
    info!("haema client 啟動 tps={}", setting.client.tps);
    loop {
        let start = Instant::now();
        for line in rx.try_iter() {
            match parse_command(&line) {
                Some(Command::Press) => state.set_dash_key(true),
                Some(Command::Release) => state.set_dash_key(false),
                Some(Command::Feed(level)) => {
                    if let Err(e) = state.feed(player, level) {
                        warn!("進食失敗: {:#}", e);
                    }
                }
                Some(Command::Look(yaw, pitch)) => {
                    if let Err(e) = state.set_look(player, Look::from_angles(yaw, pitch)) {
                        warn!("轉向失敗: {:#}", e);
                    }
                }
                Some(Command::Quit) => {
                    info!("結束");
                    return Ok(());
                }
                None => warn!("未知指令: {}", line),
            }
        }

        state.tick();

        for msg in state.outgoing().try_iter() {
            info!("-> server {}", msg.to_json());
        }
        let particles = state.particles().try_iter().count();
        if particles > 0 {
            debug!("預覽粒子 {} 個", particles);
        }

        // Wait for the next tick.
        if let Some(rest) = step.checked_sub(start.elapsed()) {
            thread::sleep(rest);
        }
    }
}
