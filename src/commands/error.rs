/// Centralized error mapping for commands. Keeps the whole context chain.
pub fn map_err(err: anyhow::Error) -> String {
    format!("{err:#}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn keeps_context_chain() {
        let err = Err::<(), _>(anyhow::anyhow!("clip record not found: k"))
            .context("Failed to mark clip record k as secret")
            .unwrap_err();
        assert_eq!(
            map_err(err),
            "Failed to mark clip record k as secret: clip record not found: k"
        );
    }
}
