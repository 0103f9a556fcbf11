pub mod site_config_reader;
