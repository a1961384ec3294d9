pub mod namedotcom;
