fn main() {
    use golist_depgraph::cli::parse;
    let cli = parse();
    golist_depgraph::app::init_tracing(cli.quiet, cli.verbose);
    let code = golist_depgraph::app::run_cli(cli);
    if code != 0 { std::process::exit(code); }
}
