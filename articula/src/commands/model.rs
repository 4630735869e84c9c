//! Model command implementations

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use console::style;
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use articula_model::flatten::BOX_TRIANGLE_INDICES;
use articula_model::shapes::{self, BUILTIN_SHAPES};
use articula_model::{Articulation, JointInfo, Model, OscillatorConfig, RenderBuffers};

use crate::utils::{
    TreeNode, TreeOptions, add_table_row, create_table, format_degrees, format_origin,
    format_ratio, render_tree,
};

/// Where a command reads its model from
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct ModelSource {
    /// Path to a model JSON document
    pub file: Option<PathBuf>,

    /// Use a built-in shape instead of a file (person, dog)
    #[arg(long, value_name = "NAME")]
    pub shape: Option<String>,
}

impl ModelSource {
    /// Load the model and a label to show for it
    pub fn load(&self) -> Result<(Model, String)> {
        if let Some(name) = &self.shape {
            let model = shapes::builtin(name).with_context(|| {
                format!(
                    "Failed to build shape '{}' (available: {})",
                    name,
                    BUILTIN_SHAPES.join(", ")
                )
            })?;
            return Ok((model, name.to_ascii_lowercase()));
        }

        match &self.file {
            Some(path) => {
                let model = Model::load(path)
                    .with_context(|| format!("Failed to load model: {}", path.display()))?;
                Ok((model, path.display().to_string()))
            }
            None => anyhow::bail!("Either a model file or --shape must be given"),
        }
    }
}

/// Output format for pose and animation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Errors in joint assignments given on the command line
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid assignment '{0}', expected JOINT=VALUE")]
    InvalidAssignment(String),

    #[error("Unknown joint '{0}'")]
    UnknownJoint(String),
}

#[derive(Subcommand)]
pub enum ModelCommands {
    /// Display information about a model
    Info {
        #[command(flatten)]
        source: ModelSource,

        /// Show per-segment details
        #[arg(long)]
        detailed: bool,
    },

    /// Validate a model document
    Validate {
        /// Path to the model JSON document
        file: PathBuf,
    },

    /// Show the segment hierarchy of a model
    Tree {
        #[command(flatten)]
        source: ModelSource,

        /// Maximum depth to display
        #[arg(long)]
        depth: Option<usize>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Show compact metadata inline
        #[arg(long)]
        compact: bool,
    },

    /// Write a model as a JSON document
    Export {
        #[command(flatten)]
        source: ModelSource,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write compact JSON instead of indented
        #[arg(long)]
        compact: bool,
    },

    /// Pose joints and print the resulting world transforms
    Pose {
        #[command(flatten)]
        source: ModelSource,

        /// Set a joint angle in degrees, by name or index (e.g. "Right Arm=45")
        #[arg(long = "set", value_name = "JOINT=DEGREES")]
        set: Vec<String>,

        /// Set a joint by slider ratio in [0, 1] (e.g. "2=0.75")
        #[arg(long = "ratio", value_name = "JOINT=RATIO")]
        ratio: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Run the idle animation and print joint angles
    Animate {
        #[command(flatten)]
        source: ModelSource,

        /// Number of ticks to run
        #[arg(long, default_value = "90", env = "ARTICULA_TICKS")]
        ticks: u32,

        /// Degrees per tick
        #[arg(long, default_value = "1.0", env = "ARTICULA_STEP")]
        step: f32,

        /// Also report angles every N ticks
        #[arg(long, value_name = "N")]
        every: Option<u32>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Dump the flattened render buffers as JSON
    Buffers {
        #[command(flatten)]
        source: ModelSource,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include per-vertex colours, normals and texture coordinates
        #[arg(long)]
        expanded: bool,
    },
}

pub fn execute(command: ModelCommands) -> Result<()> {
    match command {
        ModelCommands::Info { source, detailed } => handle_info(source, detailed),
        ModelCommands::Validate { file } => handle_validate(file),
        ModelCommands::Tree {
            source,
            depth,
            no_color,
            compact,
        } => handle_tree(source, depth, no_color, compact),
        ModelCommands::Export {
            source,
            output,
            compact,
        } => handle_export(source, output, compact),
        ModelCommands::Pose {
            source,
            set,
            ratio,
            format,
        } => handle_pose(source, set, ratio, format),
        ModelCommands::Animate {
            source,
            ticks,
            step,
            every,
            format,
        } => handle_animate(source, ticks, step, every, format),
        ModelCommands::Buffers {
            source,
            output,
            expanded,
        } => handle_buffers(source, output, expanded),
    }
}

/// Split `JOINT=VALUE`, splitting at the last `=` so names may contain one
fn parse_assignment(text: &str) -> Result<(String, f32)> {
    let (joint, value) = text
        .rsplit_once('=')
        .ok_or_else(|| CliError::InvalidAssignment(text.to_string()))?;
    let joint = joint.trim();
    if joint.is_empty() {
        return Err(CliError::InvalidAssignment(text.to_string()).into());
    }
    let value: f32 = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid number in assignment '{text}'"))?;
    Ok((joint.to_string(), value))
}

/// A joint is named by segment index or by name
fn resolve_joint(model: &Model, joint: &str) -> Result<usize> {
    if let Ok(index) = joint.parse::<usize>()
        && index < model.segment_count()
    {
        return Ok(index);
    }
    model
        .find_segment(joint)
        .ok_or_else(|| CliError::UnknownJoint(joint.to_string()).into())
}

fn handle_info(source: ModelSource, detailed: bool) -> Result<()> {
    let (model, label) = source.load()?;

    let max_depth = model.max_depth();
    let joints = model
        .segments()
        .iter()
        .filter(|s| s.is_bounded())
        .count();

    println!("\n{}", style("Model Information").bold().underlined());
    println!("Model: {}", style(&label).cyan());
    println!("Segments: {}", style(model.segment_count()).green());
    println!("Movable Joints: {}", style(joints).green());
    println!("Vertices: {}", style(model.vertices().len()).green());
    println!("Faces: {}", style(model.face_count()).green());
    println!("Surface Mode: {}", style(model.surface_mode()).yellow());
    println!(
        "Root: {}",
        style(model.segments()[model.root()].display_name(model.root())).yellow()
    );
    println!("Tree Depth: {}", max_depth);

    if detailed {
        println!("\n{}", style("Segments").bold());
        let mut table = create_table(&[
            "Index", "Name", "Parent", "Axis", "Min", "Max", "Direction", "Faces",
        ]);
        for (index, segment) in model.segments().iter().enumerate() {
            let parent = model
                .parent_of(index)
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            add_table_row(
                &mut table,
                vec![
                    index.to_string(),
                    segment.display_name(index),
                    parent,
                    segment.rotation_axis.to_string(),
                    format_degrees(segment.angle_min),
                    format_degrees(segment.angle_max),
                    format!("{:?}", segment.direction),
                    segment.face_count().to_string(),
                ],
            );
        }
        table.printstd();
    }

    Ok(())
}

fn handle_validate(path: PathBuf) -> Result<()> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    match Model::from_json(&text) {
        Ok(model) => {
            println!(
                "✓ Model '{}' is valid ({} segments, {} faces)",
                style(path.display()).cyan(),
                style(model.segment_count()).green(),
                style(model.face_count()).green()
            );
            Ok(())
        }
        Err(err) => {
            anyhow::bail!("Validation failed ({:?}): {}", err.category(), err);
        }
    }
}

fn handle_tree(
    source: ModelSource,
    depth: Option<usize>,
    no_color: bool,
    compact: bool,
) -> Result<()> {
    let (model, label) = source.load()?;
    let root = TreeNode::from_model(&model, &label);

    let options = TreeOptions {
        max_depth: depth,
        no_color,
        show_metadata: true,
        compact,
    };
    print!("{}", render_tree(&root, &options));

    Ok(())
}

fn handle_export(source: ModelSource, output: Option<PathBuf>, compact: bool) -> Result<()> {
    let (model, _) = source.load()?;
    let text = if compact {
        model.to_json()?
    } else {
        model.to_json_pretty()?
    };

    match output {
        Some(path) => {
            fs::write(&path, text + "\n")
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            println!(
                "✓ Exported {} segments to {}",
                style(model.segment_count()).green(),
                style(path.display()).cyan()
            );
        }
        None => println!("{text}"),
    }

    Ok(())
}

fn handle_pose(
    source: ModelSource,
    set: Vec<String>,
    ratio: Vec<String>,
    format: OutputFormat,
) -> Result<()> {
    let (model, _) = source.load()?;
    let mut articulation = Articulation::new(model);

    for assignment in &set {
        let (joint, degrees) = parse_assignment(assignment)?;
        let index = resolve_joint(articulation.model(), &joint)?;
        let stored = articulation.set_joint_angle(index, degrees)?;
        log::info!("Joint {} set to {}", index, stored);
    }
    for assignment in &ratio {
        let (joint, value) = parse_assignment(assignment)?;
        let index = resolve_joint(articulation.model(), &joint)?;
        let stored = articulation.set_joint_ratio(index, value)?;
        log::info!("Joint {} set to {} from ratio {}", index, stored, value);
    }

    print_joints(&articulation, format)
}

fn handle_animate(
    source: ModelSource,
    ticks: u32,
    step: f32,
    every: Option<u32>,
    format: OutputFormat,
) -> Result<()> {
    if !step.is_finite() || step <= 0.0 {
        anyhow::bail!("Step must be a positive number of degrees, got {}", step);
    }
    if every == Some(0) {
        anyhow::bail!("--every must be at least 1");
    }

    let (model, _) = source.load()?;
    let config = OscillatorConfig { step_degrees: step };
    let mut articulation = Articulation::with_config(model, config);

    let mut frames = Vec::new();
    for tick in 1..=ticks {
        articulation.advance();
        if let Some(n) = every
            && tick % n == 0
        {
            frames.push((tick, articulation.pose().as_degrees().to_vec()));
        }
    }

    match format {
        OutputFormat::Json => {
            let report = json!({
                "ticks": ticks,
                "step": step,
                "frames": frames
                    .iter()
                    .map(|(tick, angles)| json!({ "tick": tick, "angles": angles }))
                    .collect::<Vec<_>>(),
                "joints": joints_json(&articulation),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            if !frames.is_empty() {
                let names: Vec<String> =
                    articulation.joints().into_iter().map(|j| j.name).collect();
                let mut headers = vec!["Tick"];
                headers.extend(names.iter().map(String::as_str));
                let mut table = create_table(&headers);
                for (tick, angles) in &frames {
                    let mut row = vec![tick.to_string()];
                    row.extend(angles.iter().map(|&a| format_degrees(a)));
                    add_table_row(&mut table, row);
                }
                table.printstd();
                println!();
            }
            println!(
                "After {} ticks at {}°/tick:",
                style(ticks).green(),
                style(step).green()
            );
            print_joints(&articulation, OutputFormat::Table)?;
        }
    }

    Ok(())
}

fn handle_buffers(source: ModelSource, output: Option<PathBuf>, expanded: bool) -> Result<()> {
    let (model, _) = source.load()?;
    let buffers = RenderBuffers::from_model(&model);

    let segments: Vec<Value> = buffers
        .segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let mut entry = json!({
                "index": index,
                "name": model.segments()[index].display_name(index),
                "positions": segment.positions,
                "faceColors": segment.face_colors,
            });
            if expanded {
                entry["colors"] = json!(segment.vertex_colors());
                entry["normals"] = json!(segment.face_normals());
                entry["texCoords"] = json!(segment.texture_coords());
            }
            entry
        })
        .collect();

    let document = json!({
        "totalVertices": buffers.total_vertex_count(),
        "indices": BOX_TRIANGLE_INDICES.to_vec(),
        "segments": segments,
    });
    let text = serde_json::to_string_pretty(&document)?;

    match output {
        Some(path) => {
            fs::write(&path, text + "\n")
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            println!(
                "✓ Wrote buffers for {} segments to {}",
                style(buffers.segments.len()).green(),
                style(path.display()).cyan()
            );
        }
        None => println!("{text}"),
    }

    Ok(())
}

fn joint_json(joint: &JointInfo, world: &glam::Mat4) -> Value {
    json!({
        "index": joint.index,
        "name": joint.name,
        "axis": joint.axis.to_string(),
        "angle": joint.angle_degrees,
        "min": joint.min_degrees,
        "max": joint.max_degrees,
        "ratio": joint.ratio,
        "world": world.to_cols_array(),
    })
}

fn joints_json(articulation: &Articulation) -> Vec<Value> {
    articulation
        .joints()
        .iter()
        .zip(articulation.world_transforms())
        .map(|(joint, world)| joint_json(joint, world))
        .collect()
}

fn print_joints(articulation: &Articulation, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let joints = joints_json(articulation);
            println!("{}", serde_json::to_string_pretty(&joints)?);
        }
        OutputFormat::Table => {
            let mut table = create_table(&[
                "Index", "Name", "Axis", "Angle", "Min", "Max", "Slider", "Origin",
            ]);
            for (joint, world) in articulation
                .joints()
                .iter()
                .zip(articulation.world_transforms())
            {
                add_table_row(
                    &mut table,
                    vec![
                        joint.index.to_string(),
                        joint.name.clone(),
                        joint.axis.to_string(),
                        format_degrees(joint.angle_degrees),
                        format_degrees(joint.min_degrees),
                        format_degrees(joint.max_degrees),
                        format_ratio(joint.ratio),
                        format_origin(world.w_axis),
                    ],
                );
            }
            table.printstd();
        }
    }
    Ok(())
}
