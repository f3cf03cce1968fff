//! Trailgraph CLI: build a weighted graph from arguments and search it
//!
//! ```text
//! trailgraph-cli --edge A,B,1 --edge B,D,1 --edge A,C,5 --edge C,D,1 path A D
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use std::str::FromStr;
use trailgraph::{Graph, GraphConfig, PathResult};

#[derive(Parser)]
#[command(name = "trailgraph", version, about = "Weighted graph path search")]
struct Cli {
    /// Treat edges as directed (U -> V only)
    #[arg(long, global = true)]
    directed: bool,

    /// Vertex to add (repeatable). Edge endpoints are added automatically.
    #[arg(long = "vertex", value_name = "NAME", value_parser = parse_vertex_name, global = true)]
    vertices: Vec<String>,

    /// Edge as U,V,WEIGHT (repeatable)
    #[arg(long = "edge", value_name = "U,V,WEIGHT", global = true)]
    edges: Vec<EdgeSpec>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Log graph mutations and search statistics
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Algorithm {
    /// Dijkstra shortest path
    Dijkstra,
    /// Exhaustive pruning depth-first search
    Dfs,
    /// Breadth-first search (fewest hops)
    Bfs,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a path between two vertices
    Path {
        from: String,
        to: String,

        #[arg(long, short, default_value = "dijkstra")]
        algorithm: Algorithm,
    },
    /// Run every algorithm between two vertices and compare the results
    Compare { from: String, to: String },
    /// Show vertex and edge counts with per-vertex degrees
    Stats,
    /// List all edges
    Edges,
}

/// An edge given on the command line
#[derive(Clone, Debug, PartialEq)]
struct EdgeSpec {
    from: String,
    to: String,
    weight: f64,
}

impl FromStr for EdgeSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [from, to, weight] = parts.as_slice() else {
            return Err(format!("expected U,V,WEIGHT, got '{}'", s));
        };
        if from.is_empty() || to.is_empty() {
            return Err(format!("empty vertex name in '{}'", s));
        }
        let weight: f64 = weight
            .parse()
            .map_err(|_| format!("invalid weight '{}'", weight))?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(format!("weight must be a non-negative number, got {}", weight));
        }
        Ok(EdgeSpec {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        })
    }
}

/// Vertex names end up in CSV rows, so they may not contain a comma
fn parse_vertex_name(s: &str) -> Result<String, String> {
    let name = s.trim();
    if name.is_empty() {
        return Err("empty vertex name".to_string());
    }
    if name.contains(',') {
        return Err(format!("vertex name may not contain ',': '{}'", s));
    }
    Ok(name.to_string())
}

#[derive(Serialize)]
struct PathRow {
    algorithm: Algorithm,
    found: bool,
    path: Vec<String>,
    hops: usize,
    cost: Option<f64>,
}

impl PathRow {
    fn new(algorithm: Algorithm, result: PathResult<String>) -> Self {
        let found = !result.is_empty();
        PathRow {
            algorithm,
            found,
            hops: result.hops(),
            cost: found.then_some(result.cost),
            path: result.path,
        }
    }

    fn cells(&self) -> Vec<String> {
        let algorithm = format!("{:?}", self.algorithm).to_lowercase();
        if !self.found {
            return vec![algorithm, "(no path)".to_string(), "-".to_string(), "-".to_string()];
        }
        vec![
            algorithm,
            self.path.join(" -> "),
            self.hops.to_string(),
            self.cost.map(format_weight).unwrap_or_default(),
        ]
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let graph = build_graph(&cli)?;

    match &cli.command {
        Commands::Path { from, to, algorithm } => {
            let row = PathRow::new(*algorithm, search(&graph, *algorithm, from, to)?);
            print_paths(&[row], &cli.format)
        }
        Commands::Compare { from, to } => {
            let mut rows = Vec::new();
            for algorithm in [Algorithm::Dijkstra, Algorithm::Dfs, Algorithm::Bfs] {
                rows.push(PathRow::new(algorithm, search(&graph, algorithm, from, to)?));
            }
            print_paths(&rows, &cli.format)
        }
        Commands::Stats => print_stats(&graph, &cli.format),
        Commands::Edges => print_edges(&graph, &cli.format),
    }
}

fn build_graph(cli: &Cli) -> Result<Graph<String, f64>, Box<dyn std::error::Error>> {
    let mut graph = Graph::with_config(GraphConfig { directed: cli.directed });

    for vertex in &cli.vertices {
        graph.insert_vertex(vertex.clone());
    }
    for edge in &cli.edges {
        graph.insert_vertex(edge.from.clone());
        graph.insert_vertex(edge.to.clone());
        graph.insert_edge(&edge.from, &edge.to, edge.weight)?;
    }

    Ok(graph)
}

fn search(
    graph: &Graph<String, f64>,
    algorithm: Algorithm,
    from: &str,
    to: &str,
) -> Result<PathResult<String>, Box<dyn std::error::Error>> {
    let (from, to) = (from.to_string(), to.to_string());
    let result = match algorithm {
        Algorithm::Dijkstra => graph.dijkstra_shortest_path(&from, &to)?,
        Algorithm::Dfs => graph.dfs_best_path(&from, &to)?,
        Algorithm::Bfs => {
            // Report the weighted cost of the fewest-hops path
            let mut result = graph.bfs_path(&from, &to)?;
            if !result.is_empty() {
                result.cost = graph.path_weight(&result.path).unwrap_or(result.cost);
            }
            result
        }
    };
    Ok(result)
}

fn print_paths(rows: &[PathRow], format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(rows)?);
        }
        OutputFormat::Csv => {
            println!("algorithm,path,hops,cost");
            for row in rows {
                println!("{}", row.cells().join(","));
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["algorithm", "path", "hops", "cost"]);
            for row in rows {
                table.add_row(row.cells());
            }
            println!("{}", table);
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct VertexStats<'a> {
    vertex: &'a str,
    out_degree: usize,
    in_degree: usize,
}

fn print_stats(graph: &Graph<String, f64>, format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let stats: Vec<VertexStats> = graph
        .vertices()
        .map(|v| VertexStats {
            vertex: v,
            out_degree: graph.out_degree(v),
            in_degree: graph.in_degree(v),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "directed": graph.is_directed(),
                "vertices": graph.num_vertices(),
                "edges": graph.num_edges(),
                "degrees": stats,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Csv => {
            println!("vertex,out_degree,in_degree");
            for s in &stats {
                println!("{},{},{}", s.vertex, s.out_degree, s.in_degree);
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["vertex", "out", "in"]);
            for s in &stats {
                table.add_row(vec![s.vertex.to_string(), s.out_degree.to_string(), s.in_degree.to_string()]);
            }
            println!("{}", table);
            println!(
                "{} vertices, {} edges ({})",
                graph.num_vertices(),
                graph.num_edges(),
                if graph.is_directed() { "directed" } else { "undirected" }
            );
        }
    }
    Ok(())
}

fn print_edges(graph: &Graph<String, f64>, format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            let edges: Vec<_> = graph
                .edges()
                .map(|(u, v, w)| serde_json::json!({ "from": u, "to": v, "weight": w }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&edges)?);
        }
        OutputFormat::Csv => {
            println!("from,to,weight");
            for (u, v, w) in graph.edges() {
                println!("{},{},{}", u, v, format_weight(*w));
            }
        }
        OutputFormat::Table => {
            if graph.num_edges() == 0 {
                println!("(no edges)");
                return Ok(());
            }
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["from", "to", "weight"]);
            for (u, v, w) in graph.edges() {
                table.add_row(vec![u.clone(), v.clone(), format_weight(*w)]);
            }
            println!("{}", table);
            println!("{} edge(s)", graph.num_edges());
        }
    }
    Ok(())
}

fn format_weight(w: f64) -> String {
    if w.fract() == 0.0 {
        format!("{:.0}", w)
    } else {
        format!("{:.2}", w)
    }
}
