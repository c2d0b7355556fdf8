//! The fixed, ordered check catalog
//!
//! Declared order matters only where a later check's apply action depends on
//! an earlier one's side effect; those dependencies are encoded as explicit
//! requirements on the dependent check, re-verified at run time, so a failed
//! or missing prerequisite surfaces as a clean per-check failure instead of
//! an incidental one.

use std::env;
use std::path::{Path, PathBuf};

use crate::check::{Check, Requirement};
use crate::error::ShellsmithError;
use crate::fonts;
use crate::fragments::{ConfigFragment, CUSTOM_THEME_LINE, DEFAULT_THEME_LINE};
use crate::git;
use crate::pkg::{self, PackageSpec};
use crate::platform::Capabilities;
use crate::provision::Session;

/// Curated tool set installed through the platform package manager
const PACKAGES: &[PackageSpec] = &[
    PackageSpec {
        label: "zsh",
        bins: &["zsh"],
        apt: "zsh",
        dnf: "zsh",
        pacman: "zsh",
        brew: "zsh",
    },
    PackageSpec {
        label: "git",
        bins: &["git"],
        apt: "git",
        dnf: "git",
        pacman: "git",
        brew: "git",
    },
    PackageSpec {
        label: "curl",
        bins: &["curl"],
        apt: "curl",
        dnf: "curl",
        pacman: "curl",
        brew: "curl",
    },
    PackageSpec {
        label: "fzf",
        bins: &["fzf"],
        apt: "fzf",
        dnf: "fzf",
        pacman: "fzf",
        brew: "fzf",
    },
    PackageSpec {
        label: "ripgrep",
        bins: &["rg"],
        apt: "ripgrep",
        dnf: "ripgrep",
        pacman: "ripgrep",
        brew: "ripgrep",
    },
    PackageSpec {
        label: "bat",
        bins: &["bat", "batcat"],
        apt: "bat",
        dnf: "bat",
        pacman: "bat",
        brew: "bat",
    },
    PackageSpec {
        label: "eza",
        bins: &["eza"],
        apt: "eza",
        dnf: "eza",
        pacman: "eza",
        brew: "eza",
    },
    PackageSpec {
        label: "fd",
        bins: &["fd", "fdfind"],
        apt: "fd-find",
        dnf: "fd-find",
        pacman: "fd",
        brew: "fd",
    },
    PackageSpec {
        label: "zoxide",
        bins: &["zoxide"],
        apt: "zoxide",
        dnf: "zoxide",
        pacman: "zoxide",
        brew: "zoxide",
    },
];

const OH_MY_ZSH_URL: &str = "https://github.com/ohmyzsh/ohmyzsh.git";
const AUTOSUGGESTIONS_URL: &str = "https://github.com/zsh-users/zsh-autosuggestions.git";
const SYNTAX_HIGHLIGHTING_URL: &str = "https://github.com/zsh-users/zsh-syntax-highlighting.git";
const POWERLEVEL10K_URL: &str = "https://github.com/romkatv/powerlevel10k.git";

/// Build the full ordered sequence for one run
pub fn checks(caps: &Capabilities, home: &Path) -> Vec<Check> {
    let caps = *caps;
    let mut checks = Vec::new();

    for spec in PACKAGES {
        checks.push(package_check(caps, spec));
    }

    checks.push(default_shell_check());

    let omz_dir = home.join(".oh-my-zsh");
    checks.push(clone_check("oh-my-zsh", OH_MY_ZSH_URL, omz_dir.clone(), None));
    checks.push(clone_check(
        "zsh-autosuggestions",
        AUTOSUGGESTIONS_URL,
        omz_dir.join("custom/plugins/zsh-autosuggestions"),
        Some(omz_dir.clone()),
    ));
    checks.push(clone_check(
        "zsh-syntax-highlighting",
        SYNTAX_HIGHLIGHTING_URL,
        omz_dir.join("custom/plugins/zsh-syntax-highlighting"),
        Some(omz_dir.clone()),
    ));
    checks.push(clone_check(
        "powerlevel10k",
        POWERLEVEL10K_URL,
        omz_dir.join("custom/themes/powerlevel10k"),
        Some(omz_dir.clone()),
    ));

    checks.push(font_check(caps, home));

    let zshrc = caps.zshrc_path(home);
    checks.push(
        fragment_check(
            "oh-my-zsh init",
            ConfigFragment::new(
                "oh-my-zsh",
                "export ZSH=\"$HOME/.oh-my-zsh\"\n\
                 ZSH_THEME=\"robbyrussell\"\n\
                 plugins=(git zsh-autosuggestions zsh-syntax-highlighting)\n\
                 source \"$ZSH/oh-my-zsh.sh\"",
            ),
            zshrc.clone(),
        )
        .requires(Requirement::DirExists(omz_dir)),
    );
    checks.push(fragment_check(
        "aliases",
        ConfigFragment::new(
            "aliases",
            "alias ls=\"eza\"\n\
             alias ll=\"eza -la\"\n\
             alias la=\"eza -a\"\n\
             alias tree=\"eza --tree\"\n\
             alias cat=\"bat --paging=never\"",
        ),
        zshrc.clone(),
    ));
    checks.push(
        fragment_check(
            "fzf keybindings",
            ConfigFragment::new("fzf", "source <(fzf --zsh)"),
            zshrc.clone(),
        )
        .requires(Requirement::BinaryOnPath("fzf")),
    );
    checks.push(
        fragment_check(
            "zoxide init",
            ConfigFragment::new("zoxide", "eval \"$(zoxide init zsh)\""),
            zshrc.clone(),
        )
        .requires(Requirement::BinaryOnPath("zoxide")),
    );

    checks.push(theme_swap_check(zshrc));

    checks.push(fragment_check(
        "kitty font",
        ConfigFragment::new(
            "kitty font",
            "font_family      MesloLGS Nerd Font Mono\n\
             bold_font        auto\n\
             italic_font      auto\n\
             font_size        13.0",
        ),
        caps.kitty_conf_path(home),
    ));

    checks
}

fn package_check(caps: Capabilities, spec: &'static PackageSpec) -> Check {
    let package = caps.package_name(spec);
    let (program, args) = caps.install_command(package);
    let detail = pkg::render_command(&program, &args);

    Check::install(
        spec.label,
        move |_: &mut Session| Ok(pkg::any_binary_on_path(spec.bins)),
        move |_: &mut Session| pkg::install(&caps, package),
    )
    .with_detail(detail)
}

/// Presence from $SHELL; the apply shells out to chsh. Requires the zsh
/// binary explicitly: the package check earlier in the sequence may have
/// failed, and this check re-verifies instead of assuming.
fn default_shell_check() -> Check {
    Check::configure(
        "default shell",
        |_: &mut Session| {
            Ok(env::var("SHELL")
                .map(|shell| shell.ends_with("/zsh") || shell == "zsh")
                .unwrap_or(false))
        },
        |_: &mut Session| {
            let zsh = pkg::binary_path("zsh")?;
            pkg::run_command("chsh", &["-s".to_string(), zsh.display().to_string()])
        },
    )
    .requires(Requirement::BinaryOnPath("zsh"))
    .with_detail("chsh -s $(command -v zsh)")
}

fn clone_check(
    label: &'static str,
    url: &'static str,
    dest: PathBuf,
    framework: Option<PathBuf>,
) -> Check {
    let probe_dest = dest.clone();
    let mut check = Check::install(
        label,
        move |_: &mut Session| Ok(probe_dest.is_dir()),
        move |_: &mut Session| git::clone(url, &dest),
    )
    .slow()
    .with_detail(format!("git clone --depth 1 {}", url));

    if let Some(dir) = framework {
        check = check.requires(Requirement::DirExists(dir));
    }
    check
}

fn font_check(caps: Capabilities, home: &Path) -> Check {
    let font_dir = caps.font_dir(home);
    let probe_dir = font_dir.clone();

    Check::install(
        "meslo nerd font",
        move |_: &mut Session| Ok(fonts::installed(&probe_dir)),
        move |_: &mut Session| fonts::install(&font_dir, caps.needs_font_cache_refresh),
    )
    .slow()
    .with_detail(format!("download {}", fonts::FONT_ARCHIVE_URL))
}

fn fragment_check(label: &'static str, fragment: ConfigFragment, path: PathBuf) -> Check {
    let probe_fragment = fragment.clone();
    let probe_path = path.clone();

    Check::configure(
        label,
        move |s: &mut Session| Ok(probe_fragment.is_present_in(s.editors.editor(&probe_path)?)),
        move |s: &mut Session| {
            fragment.append_to(s.editors.editor(&path)?);
            Ok(())
        },
    )
}

/// The one narrowly-scoped find-and-replace: swap the default theme marker
/// for the customized one, guarded by the same presence-check-before-apply
/// rule as every append
fn theme_swap_check(zshrc: PathBuf) -> Check {
    let probe_path = zshrc.clone();

    Check::configure(
        "powerlevel10k theme",
        move |s: &mut Session| {
            Ok(s.editors
                .editor(&probe_path)?
                .contains_line(CUSTOM_THEME_LINE))
        },
        move |s: &mut Session| {
            let editor = s.editors.editor(&zshrc)?;
            if editor.replace_once(DEFAULT_THEME_LINE, CUSTOM_THEME_LINE) {
                Ok(())
            } else {
                Err(ShellsmithError::MarkerNotFound {
                    path: editor.path().display().to_string(),
                    marker: DEFAULT_THEME_LINE.to_string(),
                })
            }
        },
    )
}
