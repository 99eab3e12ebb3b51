use std::fs::File;
use std::io::Read;
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use csv::{ReaderBuilder, Trim};

use uniprocessor::constants::{Algorithm, FcfsOrder, Stepping, TieBreak};
use uniprocessor::report::format_report;
use uniprocessor::simulation::run_all;
use uniprocessor::{Job, JobSet, Priority, SchedulerError, SimulationConfig, TimeStep, ID};

const FIELDS_PER_JOB: usize = 4;

/// Reads jobs as `id arrival priority service` quadruplets. Values may be
/// separated by whitespace or commas and laid out over any number of lines.
pub fn parse_jobs<R: Read>(reader: R) -> Result<JobSet, SchedulerError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut tokens: Vec<(String, u64)> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        for field in record.iter() {
            tokens.extend(field.split_whitespace().map(|token| (token.to_string(), line)));
        }
    }

    let trailing = tokens.len() % FIELDS_PER_JOB;
    if trailing != 0 {
        return Err(SchedulerError::TruncatedRecord(trailing));
    }

    let mut jobs = Vec::with_capacity(tokens.len() / FIELDS_PER_JOB);
    for quad in tokens.chunks(FIELDS_PER_JOB) {
        let id: ID = parse_field("id", &quad[0])?;
        let arrival_time: TimeStep = parse_field("arrival time", &quad[1])?;
        let priority: Priority = parse_field("priority", &quad[2])?;
        let service_time: TimeStep = parse_field("service time", &quad[3])?;

        jobs.push(Job::new(id, arrival_time, priority, service_time));
    }

    JobSet::new(jobs)
}

fn parse_field<T: std::str::FromStr>(field: &'static str, (token, line): &(String, u64)) -> Result<T, SchedulerError> {
    token.parse().map_err(|_| SchedulerError::InvalidField {
        field,
        token: token.clone(),
        line: *line,
    })
}

/// Reads a job file and returns a `JobSet`
pub fn read_job_file(file_path: &str) -> Result<JobSet, SchedulerError> {
    parse_jobs(File::open(file_path)?)
}

pub fn build_cli_command() -> Command {
    Command::new("CPU Scheduling Simulator")
    .version("0.1.0")
    .about("Simulates FCFS and preemptive priority scheduling of a job file")

    .arg(Arg::new("job_file")
        .default_value("jobs.txt")
        .help("Path to the job file (id, arrival time, priority, service time per job)"))

    .arg(Arg::new("algorithm")
        .short('a')
        .long("algorithm")
        .help("Scheduling discipline to simulate")
        .value_parser(["fcfs", "priority", "all"])
        .default_value("all"))

    .arg(Arg::new("fcfs_order")
        .short('o')
        .long("fcfs-order")
        .help("Run FCFS in input order or sorted by arrival time")
        .value_parser(["input", "arrival"])
        .default_value("input"))

    .arg(Arg::new("tie_break")
        .short('t')
        .long("tie-break")
        .help("Secondary key between equal priorities (queue scan order, or arrival then id)")
        .value_parser(["scan", "arrival"])
        .default_value("scan"))

    .arg(Arg::new("stepping")
        .short('s')
        .long("stepping")
        .help("Advance the priority simulation per tick or per event")
        .value_parser(["tick", "event"])
        .default_value("tick"))

    .arg(Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Log scheduling decisions to stderr (repeat for more detail)"))
}

fn arg_value<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches.get_one::<String>(name).map(String::as_str).unwrap_or_default()
}

/// Maps parsed arguments onto a `SimulationConfig`.
pub fn config_from_matches(matches: &ArgMatches) -> Result<SimulationConfig, SchedulerError> {
    let algorithms = match arg_value(matches, "algorithm") {
        "all" => vec![Algorithm::FirstComeFirstServed, Algorithm::PriorityPreemptive],
        other => vec![other.parse::<Algorithm>()?],
    };

    Ok(SimulationConfig {
        algorithms,
        fcfs_order: arg_value(matches, "fcfs_order").parse::<FcfsOrder>()?,
        tie_break: arg_value(matches, "tie_break").parse::<TieBreak>()?,
        stepping: arg_value(matches, "stepping").parse::<Stepping>()?,
        verbosity: matches.get_count("verbose"),
    })
}

fn main() {
    // cargo run [job_file] [-a fcfs|priority|all] [-o input|arrival] [-t scan|arrival] [-s tick|event] [-v...]
    // example : cargo run jobs.txt -a priority -s event -vv
    let matches: ArgMatches = build_cli_command().get_matches();

    let config = match config_from_matches(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid arguments: {}", e);
            process::exit(2);
        }
    };

    let job_file = matches.get_one::<String>("job_file").map(String::as_str).unwrap_or("jobs.txt");
    let job_set = match read_job_file(job_file) {
        Ok(job_set) => job_set,
        Err(e) => {
            eprintln!("Error reading job file: {}", e);
            process::exit(5);
        }
    };

    for (algorithm, result) in run_all(&job_set, &config) {
        print!("{}", format_report(algorithm.title(), &result));
    }
}
