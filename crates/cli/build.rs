use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("matchday")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the fixtures of an FFVB volleyball pool")
        .arg(
            clap::arg!(-i --input <FILE> "Read the schedule from a local HTML file, or '-' for stdin")
                .value_name("FILE"),
        )
        .arg(clap::arg!(--url <URL> "Schedule page to fetch").value_name("URL"))
        .arg(clap::arg!(--season <SEASON> "Season of the pool to fetch").value_name("SEASON"))
        .arg(clap::arg!(--entity <CODE> "League code of the pool").value_name("CODE"))
        .arg(clap::arg!(--pool <CODE> "Pool code").value_name("CODE"))
        .arg(
            clap::arg!(--cert <PEM> "PEM bundle trusted for the TLS connection")
                .value_name("PEM")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--"system-roots" "Trust the platform root certificates instead of a PEM bundle"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").value_name("SECS"))
        .arg(clap::arg!(--team <NAME> "Only print fixtures involving this team").value_name("NAME"))
        .arg(clap::arg!(--"skip-byes" "Leave out fixtures against the bye placeholder"))
        .arg(clap::arg!(--standings "Print the pool standings instead of the fixtures"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "matchday", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "matchday", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "matchday", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "matchday", &completions_dir).unwrap();
}
