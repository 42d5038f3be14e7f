use std::env;
use std::fmt::Display;
use std::process;

use clap::{value_t, App, AppSettings, Arg, ArgMatches, SubCommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use state_search::benchmark;
use state_search::config::{MazeHeuristic, Method};
use state_search::heuristic;
use state_search::problem::Problem;
use state_search::solver::{self, SolverOk};
use state_search::{LoadLayout, LoadPuzzle, Solve};

fn main() {
    env_logger::init();

    let method_arg = Arg::with_name("method")
        .short("m")
        .long("method")
        .takes_value(true)
        .possible_values(&["bfs", "ucs", "astar"])
        .help("search method");
    let status_arg = Arg::with_name("status")
        .short("s")
        .long("status")
        .help("print status while searching");

    let matches = App::new("state-search")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves Pacman mazes and 8-puzzles with BFS, UCS or A*")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("maze")
                .about("eat all food and touch all four corners")
                .arg(method_arg.clone().default_value("bfs"))
                .arg(
                    Arg::with_name("heuristic")
                        .long("heuristic")
                        .takes_value(true)
                        .possible_values(&["euclidean", "manhattan"])
                        .default_value("euclidean")
                        .help("distance estimate used by astar"),
                ).arg(
                    Arg::with_name("raw")
                        .short("r")
                        .long("raw")
                        .help("print the path without removing back-and-forth moves"),
                ).arg(status_arg.clone())
                .arg(Arg::with_name("file").required(true)),
        ).subcommand(
            SubCommand::with_name("puzzle")
                .about("slide the tiles of an 8-puzzle into order")
                .arg(method_arg.default_value("astar"))
                .arg(status_arg)
                .arg(Arg::with_name("file").required(true)),
        ).subcommand(
            SubCommand::with_name("bench")
                .about("compare BFS and A* on random 8-puzzles")
                .arg(
                    Arg::with_name("trials")
                        .short("t")
                        .long("trials")
                        .takes_value(true)
                        .default_value("1000")
                        .help("number of random instances"),
                ).arg(
                    Arg::with_name("seed")
                        .long("seed")
                        .takes_value(true)
                        .help("seed for generating instances"),
                ),
        ).get_matches();

    match matches.subcommand() {
        ("maze", Some(sub)) => run_maze(sub),
        ("puzzle", Some(sub)) => run_puzzle(sub),
        ("bench", Some(sub)) => run_bench(sub),
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn run_maze(matches: &ArgMatches<'_>) {
    let method = value_t!(matches, "method", Method).unwrap_or_else(|e| e.exit());
    let maze_heuristic = value_t!(matches, "heuristic", MazeHeuristic).unwrap_or_else(|e| e.exit());
    let path = matches.value_of("file").unwrap();

    let problem = path.load_layout().unwrap_or_else(|err| exit_with(path, err));

    println!("Solving {} using {}...", path, method);
    print!("{}", problem);
    let solution = solver::search(
        &problem,
        method,
        heuristic::for_maze(maze_heuristic),
        matches.is_present("status"),
    );
    report(&problem, &solution, matches.is_present("raw"));
}

fn run_puzzle(matches: &ArgMatches<'_>) {
    let method = value_t!(matches, "method", Method).unwrap_or_else(|e| e.exit());
    let path = matches.value_of("file").unwrap();

    let problem = path.load_puzzle().unwrap_or_else(|err| exit_with(path, err));

    println!("Solving {} using {}...", path, method);
    print!("{}", problem);
    let solution = problem.solve(method, matches.is_present("status"));
    report(&problem, &solution, false);
}

fn run_bench(matches: &ArgMatches<'_>) {
    let trials = value_t!(matches, "trials", usize).unwrap_or_else(|e| e.exit());
    let report = if matches.is_present("seed") {
        let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
        benchmark::run(trials, &mut StdRng::seed_from_u64(seed))
    } else {
        benchmark::run(trials, &mut rand::rng())
    };
    print!("{}", report);
}

fn report<P: Problem>(problem: &P, solution: &SolverOk<P::Action>, raw: bool) {
    println!("{}", solution.stats);
    if !solution.is_solved() {
        println!("No solution");
        return;
    }

    let actions = if raw { solution.path() } else { solution.actions() };
    let names: Vec<_> = actions.iter().map(|a| a.to_string()).collect();
    println!("Found solution:");
    println!("[{}]", names.join(", "));
    println!("Total cost: {}", problem.cost_of_actions(actions));
}

fn exit_with<T>(path: &str, err: impl Display) -> T {
    let current_dir = env::current_dir()
        .map(|dir| dir.display().to_string())
        .unwrap_or_default();
    eprintln!("Can't load {} in {}: {}", path, current_dir, err);
    process::exit(1);
}
