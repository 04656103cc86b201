//! Shared harness for driving the CLI in-process.

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for (key, value) in pairs {
            let previous = std::env::var(key).ok();
            unsafe {
                std::env::set_var(key, value);
            }
            restores.push((key.to_string(), previous));
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

pub fn clear_config_env() {
    unsafe {
        std::env::remove_var("YAHTZEE_CONFIG");
        std::env::remove_var("YAHTZEE_FORMAT");
        std::env::remove_var("YAHTZEE_SHOW_ZERO");
    }
}

pub fn run(args: &[&str]) -> CliResult {
    run_with_env(args, &[])
}

pub fn run_with_env(args: &[&str], env: &[(&str, &str)]) -> CliResult {
    let _guard = EnvGuard::apply(env);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv: Vec<String> = std::iter::once("yahtzee".to_string())
        .chain(args.iter().map(|s| s.to_string()))
        .collect();
    let code = yahtzee_cli::run(argv, &mut out, &mut err);
    CliResult {
        exit_code: code,
        stdout: String::from_utf8_lossy(&out).to_string(),
        stderr: String::from_utf8_lossy(&err).to_string(),
    }
}
