//! Driver that checks every case of a [`KatSuite`] against the engine.

use ciphra::symmetric::CipherContext;

use super::error::{KatError, Result};
use super::model::{Expect, KatCase, KatGroup, KatSuite};
use crate::{drive, random_chunks};

/// Outcome of one suite run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub passed: usize,
    pub failed: usize,
}

/// Walks suites and tallies results.
pub struct Runner {
    seed: u64,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(0x5eed)
    }
}

impl Runner {
    /// `seed` fixes the random chunking used for the streaming checks
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn run_suite(&self, suite: &KatSuite) -> Result<Report> {
        let mut report = Report::default();

        for group in &suite.groups {
            tracing::info!(
                suite = %suite.name,
                algorithm = %group.algorithm,
                cases = group.tests.len(),
                "running group"
            );
            let ctx = CipherContext::from_name(&group.algorithm)?.with_padding(group.padding);

            for case in &group.tests {
                match self.run_case(&ctx, group, case) {
                    Ok(()) => report.passed += 1,
                    Err(e) => {
                        report.failed += 1;
                        tracing::error!(suite = %suite.name, algorithm = %group.algorithm, "{}", e);
                    }
                }
            }
        }

        tracing::info!(
            suite = %suite.name,
            passed = report.passed,
            failed = report.failed,
            "suite complete"
        );
        if report.failed > 0 {
            return Err(KatError::Failed {
                failed: report.failed,
                total: suite.case_count(),
            });
        }
        Ok(report)
    }

    pub fn run_case(&self, ctx: &CipherContext, group: &KatGroup, case: &KatCase) -> Result<()> {
        let key = hex::decode(&group.key)?;
        let iv = hex::decode(case.iv.as_deref().unwrap_or(&group.iv))?;
        let pt = hex::decode(&case.pt)?;
        let ct = hex::decode(&case.ct)?;

        match case.expect {
            Expect::Valid => {
                let encrypted = ctx.encrypt(&pt, &key, &iv)?;
                compare(case.id, "one-shot ciphertext", &ct, &encrypted)?;
                let decrypted = ctx.decrypt(&ct, &key, &iv)?;
                compare(case.id, "one-shot plaintext", &pt, &decrypted)?;

                let seed = self.seed ^ u64::from(case.id);
                let mut stream = ctx.encrypt_init(&key, &iv)?;
                let streamed = drive(&mut stream, &random_chunks(&pt, seed))?;
                compare(case.id, "streamed ciphertext", &ct, &streamed)?;

                let mut stream = ctx.decrypt_init(&key, &iv)?;
                let streamed = drive(&mut stream, &random_chunks(&ct, seed))?;
                compare(case.id, "streamed plaintext", &pt, &streamed)
            }
            Expect::Invalid => {
                let expected = case.error.clone().unwrap_or_default();
                match ctx.decrypt(&ct, &key, &iv) {
                    Err(e) if expected.is_empty() || e.kind() == expected => Ok(()),
                    Err(e) => Err(KatError::WrongError {
                        id: case.id,
                        expected,
                        actual: e.kind().to_string(),
                    }),
                    Ok(plain) => Err(KatError::WrongError {
                        id: case.id,
                        expected,
                        actual: format!("success ({} bytes)", plain.len()),
                    }),
                }
            }
        }
    }
}

fn compare(id: u32, what: &'static str, expected: &[u8], actual: &[u8]) -> Result<()> {
    if expected == actual {
        return Ok(());
    }
    Err(KatError::Mismatch {
        id,
        what,
        expected: hex::encode(expected),
        actual: hex::encode(actual),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suites::kat::parse_suite;

    const SUITE: &str = r#"
name = "inline"

[[groups]]
algorithm = "aes-128-ctr"
key = "2b7e151628aed2a6abf7158809cf4f3c"
iv = "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff"

[[groups.tests]]
id = 1
pt = "6bc1bee22e409f96e93d7e117393172a"
ct = "874d6191b620e3261bef6864990db6ce"
"#;

    #[test]
    fn test_inline_suite_passes() {
        let suite = parse_suite(SUITE).unwrap();
        let report = Runner::default().run_suite(&suite).unwrap();
        assert_eq!(report, Report { passed: 1, failed: 0 });
    }

    #[test]
    fn test_wrong_ciphertext_is_reported() {
        let mut suite = parse_suite(SUITE).unwrap();
        suite.groups[0].tests[0].ct = "00".repeat(16);
        assert!(matches!(
            Runner::default().run_suite(&suite),
            Err(KatError::Failed { failed: 1, total: 1 })
        ));
    }
}
