use anyhow::Result;
use linkmask_config::Config;
use linkmask_mask::LinkMasker;
use std::path::Path;

use super::load_config;

pub fn handle(texts: Vec<String>, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;

    for line in mask_texts(&texts, &config)? {
        println!("{}", line);
    }

    Ok(())
}

fn mask_texts(texts: &[String], config: &Config) -> Result<Vec<String>> {
    let masker = LinkMasker::new(config.masking.scheme.clone(), config.masking.mask_char)?;
    Ok(texts.iter().map(|text| masker.mask(text)).collect())
}
