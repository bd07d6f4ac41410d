// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `bg completions <shell>`
//!
//! Completes the `auto`, `manual` and `menu` modes along with the global
//! simulation flags, so `--gates`, `--discovery` or `--min-delay` work after
//! any mode. Install once per shell:
//!
//! ```bash
//! bg completions bash > ~/.local/share/bash-completion/completions/bg
//! bg completions fish > ~/.config/fish/completions/bg.fish
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Write the completion script for `shell` to `out`
pub fn generate_completions<C: CommandFactory>(shell: Shell, out: &mut impl Write) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "bg", out);
}

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut out = Vec::new();
        generate_completions::<crate::Cli>(shell, &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bash_script_covers_modes_and_simulation_flags() {
        let script = script(Shell::Bash);
        for word in ["auto", "manual", "menu", "--gates", "--discovery", "--min-delay"] {
            assert!(script.contains(word), "bash completions lack {word}");
        }
    }

    #[test]
    fn fish_script_completes_the_bg_binary() {
        assert!(script(Shell::Fish).contains("complete -c bg"));
    }
}
