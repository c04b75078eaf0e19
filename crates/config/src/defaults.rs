/// Default values for configuration fields

pub const DEFAULT_CONFIG_FILE: &str = "picstash.json";

pub fn aws_region() -> String {
    "us-east-1".to_string()
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"{
  "storage": {
    "dir": { "path": "./uploads" }
  },
  "variants": {
    "resize": {
      "thumb": "100x100",
      "large": "1024x768"
    },
    "crop": {
      "square": "250x250"
    }
  }
}
"#;
