use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    embundle completions bash > ~/.bash_completion.d/embundle\n\n\
                  Generate zsh completions:\n    embundle completions zsh > ~/.zfunc/_embundle\n\n\
                  Generate fish completions:\n    embundle completions fish > ~/.config/fish/completions/embundle.fish\n\n\
                  Generate PowerShell completions:\n    embundle completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
