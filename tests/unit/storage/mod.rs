mod test_config;
mod test_schema;
mod test_session;
