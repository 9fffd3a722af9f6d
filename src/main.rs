use clap::Parser;
use microspotter::{cli, config, error, spotter};
use microspotter_common::{catalog, progress};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let store_dir = config.resolve_store_dir(cli.store_dir.as_deref())?;

    match cli.command {
        Commands::Catalog => {
            let store = spotter::open_store(&store_dir)?;
            println!("🔬 MicroSpotter - カタログ\n");
            for line in spotter::catalog_lines(&store) {
                println!("{}", line);
            }
        }

        Commands::Status => {
            let store = spotter::open_store(&store_dir)?;
            for line in spotter::status_lines(&store) {
                println!("{}", line);
            }
        }

        Commands::Show { name } => {
            let organism = spotter::lookup(&name)?;
            let store = spotter::open_store(&store_dir)?;
            for line in spotter::show_lines(&store, organism) {
                println!("{}", line);
            }
        }

        Commands::Spot { name, image } => {
            let mut store = spotter::open_store(&store_dir)?;
            let (organism, newly_spotted) = spotter::spot(&mut store, &name, &image)?;
            if newly_spotted {
                println!("✔ {} を発見済みにしました", organism.name);
            } else {
                println!("✔ {} の写真を差し替えました", organism.name);
            }
            println!("{}", progress::label(store.spotted_count(), catalog::total()));
        }

        Commands::Unspot { name } => {
            let mut store = spotter::open_store(&store_dir)?;
            let (organism, removed) = spotter::unspot(&mut store, &name)?;
            if removed {
                println!("✔ {} の写真を削除しました", organism.name);
                println!("{}", progress::label(store.spotted_count(), catalog::total()));
            } else {
                println!("{} には写真が登録されていません", organism.name);
            }
        }

        Commands::Reset => {
            // 壊れたデータも初期化できるよう寛容に読み込む
            let removed = spotter::reset(&store_dir)?;
            println!("✔ {}件の写真を削除しました", removed);
        }

        Commands::Config { set_store_dir, show } => {
            let mut config = config;
            let show = config::show_requested(set_store_dir.as_deref(), show);

            if let Some(dir) = set_store_dir {
                config.set_store_dir(dir)?;
                println!("✔ 保存先を設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  保存先: {}", config.resolve_store_dir(cli.store_dir.as_deref())?.display());
            }
        }
    }

    Ok(())
}
