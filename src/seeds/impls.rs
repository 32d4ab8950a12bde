pub mod seed_config_manager;
