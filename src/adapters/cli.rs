pub mod clap_adapter;
