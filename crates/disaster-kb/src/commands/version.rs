pub fn run() -> anyhow::Result<()> {
    println!("disaster-kb {}", env!("CARGO_PKG_VERSION"));
    println!("Historical disaster profiles for keyword retrieval");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_output() {
        let result = run();
        assert!(result.is_ok());
    }
}
