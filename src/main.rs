use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use segtree::{math, RefreshStrategy, SegmentTree, TreeConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "segtree", about = "Range aggregation over a static segment tree")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug)]
struct TreeArgs {
    /// Comma-separated leaf values, e.g. `1,2,3,4,5`.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Vec<i64>,
    /// Merge operation applied to adjacent aggregates.
    #[arg(long, value_enum, default_value_t = MergeOp::Sum)]
    op: MergeOp,
    /// How ancestors are recomputed after an update.
    #[arg(long, value_enum, default_value_t = Refresh::Full)]
    refresh: Refresh,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the aggregate of every value.
    Top {
        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Aggregate leaf-local range [BEGIN, END).
    Calc {
        #[command(flatten)]
        tree: TreeArgs,
        /// First leaf (inclusive).
        begin: usize,
        /// Last leaf (exclusive).
        end: usize,
    },
    /// Replace one leaf, then print the new aggregate.
    Update {
        #[command(flatten)]
        tree: TreeArgs,
        /// Leaf-local position to overwrite.
        leaf: usize,
        /// New value.
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Dump every slot of the tree.
    Dump {
        #[command(flatten)]
        tree: TreeArgs,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MergeOp {
    Sum,
    Product,
    Min,
    Max,
}

impl MergeOp {
    fn apply(self, a: &i64, b: &i64) -> i64 {
        match self {
            MergeOp::Sum => a.wrapping_add(*b),
            MergeOp::Product => a.wrapping_mul(*b),
            // Two operands: never empty.
            MergeOp::Min => math::min_or_default(&[*a, *b]),
            MergeOp::Max => math::max_or_default(&[*a, *b]),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Refresh {
    Full,
    Path,
}

impl From<Refresh> for RefreshStrategy {
    fn from(refresh: Refresh) -> Self {
        match refresh {
            Refresh::Full => RefreshStrategy::FullRebuild,
            Refresh::Path => RefreshStrategy::AncestorPath,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Top { tree } => {
            let tree = build_tree(&tree);
            print_aggregate(tree.top().copied());
        }
        Commands::Calc { tree, begin, end } => {
            let tree = build_tree(&tree);
            let value = tree
                .checked_calc(begin, end)
                .with_context(|| format!("cannot aggregate [{}, {})", begin, end))?;
            print_aggregate(value);
        }
        Commands::Update { tree, leaf, value } => {
            let mut tree = build_tree(&tree);
            tree.update_leaf(leaf, value)
                .with_context(|| format!("cannot update leaf {}", leaf))?;
            print_aggregate(tree.top().copied());
        }
        Commands::Dump { tree } => build_tree(&tree).print(),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_tree(args: &TreeArgs) -> SegmentTree<i64, impl Fn(&i64, &i64) -> i64> {
    let op = args.op;
    let config = TreeConfig::default().with_refresh(args.refresh.into());
    SegmentTree::with_config(
        args.values.iter().copied(),
        move |a: &i64, b: &i64| op.apply(a, b),
        config,
    )
}

fn print_aggregate(value: Option<i64>) {
    match value {
        Some(v) => println!("{}", v),
        None => println!("(empty)"),
    }
}
