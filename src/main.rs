use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use parking_lot::deadlock;
use serde_json::json;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use swarm_keeper::config::structs::configuration::Configuration;
use swarm_keeper::logging::setup_logging;
use swarm_keeper::persistence::structs::json_state_backend::JsonStateBackend;
use swarm_keeper::security::security::generate_secure_passkey;
use swarm_keeper::seeds::generator::generate_seeds;
use swarm_keeper::structs::Cli;
use swarm_keeper::swarm::structs::swarm_manager::SwarmManager;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    if args.generate_passkey {
        println!("{}", generate_secure_passkey());
        return Ok(());
    }

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(error) => {
            eprintln!("{error}");
            exit(101)
        }
    };

    if args.generate_seeds {
        for seed in generate_seeds(config.seeds.seed_count, config.seeds.seed_length) {
            println!("{seed}");
        }
        return Ok(());
    }

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    config.check_passkey();

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let manager = Arc::new(SwarmManager::new(config.clone()));

            let backend = if config.persistence.enabled {
                let backend = match JsonStateBackend::new(&config.persistence.path, &config.core.hidden_passkey).await {
                    Ok(backend) => Arc::new(backend),
                    Err(error) => {
                        error!("[BOOT] Unable to open state directory {}: {error}", config.persistence.path);
                        exit(1);
                    }
                };
                if let Err(error) = manager.load_state(backend.as_ref()).await {
                    error!("[BOOT] Unable to load persisted state: {error}");
                    exit(1);
                }
                Some(backend)
            } else {
                warn!("[BOOT] Persistence is disabled, state will be lost on shutdown");
                None
            };

            if args.status {
                let status = json!({
                    "items": manager.items_count(),
                    "hidden": manager.hidden_count(),
                    "seeds": manager.get_seed_config(),
                    "stats": manager.get_stats(),
                });
                match serde_json::to_string_pretty(&status) {
                    Ok(output) => println!("{output}"),
                    Err(error) => error!("[STATUS] Unable to render status: {error}"),
                }
                return Ok(());
            }

            let tokio_shutdown = Shutdown::new()
                .map_err(|error| std::io::Error::other(format!("{error:?}")))?;

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            if let Some(backend) = backend.clone() {
                let updates_handler = tokio_shutdown.clone();
                let manager_spawn_updates = manager.clone();
                let update_interval = config.persistence.interval;
                info!("[BOOT] Starting thread for state updates with {update_interval} seconds delay...");

                tokio::spawn(async move {
                    let mut interval = tokio::time::interval(Duration::from_secs(update_interval));
                    loop {
                        tokio::select! {
                            _ = interval.tick() => {
                                info!("[STATE UPDATES] Starting batch updates...");
                                if let Err(error) = manager_spawn_updates.save_updates(backend.as_ref()).await {
                                    error!("[STATE UPDATES] Batch updates failed, retrying next round: {error}");
                                } else {
                                    info!("[STATE UPDATES] Batch updates completed");
                                }
                            }
                            _ = updates_handler.handle() => {
                                info!("[BOOT] Shutting down thread for state updates...");
                                return;
                            }
                        }
                    }
                });
            }

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");

                    tokio_shutdown.handle().await;

                    if let Some(backend) = backend {
                        info!("Saving final state...");
                        if let Err(error) = manager.save_updates(backend.as_ref()).await {
                            error!("Unable to save final state: {error}");
                        }
                    }

                    info!("Shutting down completed");
                    Ok(())
                }
            }
        })
}
