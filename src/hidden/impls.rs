pub mod hidden_set;
