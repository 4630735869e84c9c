//! JSON persistence for models
//!
//! Import is two-phase: serde parses the text into [`ModelDocument`], which
//! only checks field presence and primitive types, then
//! [`Model::try_from`] validates codes, face arity and the tree and builds
//! the model. Nothing is constructed unless both phases succeed.
//!
//! Field names match the documents written by the browser viewer
//! (`edge`, `joints`, `maxRotateAngle`, `bumpType`, `rootNode`, ...). The
//! descriptive names (`segments`, `joint`, `angleMax`, `surfaceMode`,
//! `rootIndex`, ...) are accepted as aliases.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::common::{Face, OscillationDirection, RotationAxis, SurfaceMode};
use crate::error::{ModelError, Result};
use crate::model::Model;
use crate::segment::Segment;

/// On-disk shape of a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDocument {
    /// Shared vertex pool
    pub vertices: Vec<[f32; 3]>,

    #[serde(rename = "edge", alias = "segments")]
    pub segments: Vec<SegmentDocument>,

    /// Surface mode code, 0..=3
    #[serde(rename = "bumpType", alias = "surfaceMode")]
    pub surface_mode: i64,

    #[serde(rename = "rootNode", alias = "rootIndex")]
    pub root: usize,
}

/// On-disk shape of one segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDocument {
    /// Faces as plain index lists so a wrong arity can be reported
    pub topology: Vec<Vec<usize>>,

    #[serde(rename = "color", alias = "colors")]
    pub colors: Vec<[f32; 4]>,

    #[serde(rename = "joints", alias = "joint")]
    pub joint: [f32; 3],

    #[serde(default)]
    pub name: Option<String>,

    pub sibling: Option<usize>,

    pub child: Option<usize>,

    /// 0 = X, 1 = Y, 2 = Z, 3 = none
    pub rotation_axis: i64,

    #[serde(rename = "maxRotateAngle", alias = "angleMax")]
    pub angle_max: f32,

    #[serde(rename = "minRotateAngle", alias = "angleMin")]
    pub angle_min: f32,

    /// 1 or -1
    #[serde(rename = "rotateDirection", alias = "oscillationDirection")]
    pub direction: i64,
}

impl From<&Segment> for SegmentDocument {
    fn from(segment: &Segment) -> Self {
        Self {
            topology: segment.topology.iter().map(|face| face.to_vec()).collect(),
            colors: segment.colors.clone(),
            joint: segment.joint.to_array(),
            name: segment.name.clone(),
            sibling: segment.sibling,
            child: segment.child,
            rotation_axis: i64::from(segment.rotation_axis.code()),
            angle_max: segment.angle_max,
            angle_min: segment.angle_min,
            direction: i64::from(segment.direction.value()),
        }
    }
}

impl From<&Model> for ModelDocument {
    fn from(model: &Model) -> Self {
        Self {
            vertices: model.vertices().iter().map(|v| v.to_array()).collect(),
            segments: model.segments().iter().map(SegmentDocument::from).collect(),
            surface_mode: i64::from(model.surface_mode().code()),
            root: model.root(),
        }
    }
}

impl SegmentDocument {
    fn into_segment(self, index: usize) -> Result<Segment> {
        let topology = self
            .topology
            .into_iter()
            .enumerate()
            .map(|(face, indices)| {
                let len = indices.len();
                Face::try_from(indices).map_err(|_| ModelError::FaceArity {
                    segment: index,
                    face,
                    len,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let rotation_axis =
            RotationAxis::from_code(self.rotation_axis).ok_or(ModelError::InvalidRotationAxis {
                segment: index,
                code: self.rotation_axis,
            })?;

        let direction = OscillationDirection::from_value(self.direction).ok_or(
            ModelError::InvalidDirection {
                segment: index,
                value: self.direction,
            },
        )?;

        Ok(Segment {
            name: self.name,
            topology,
            colors: self.colors,
            joint: Vec3::from_array(self.joint),
            rotation_axis,
            angle_min: self.angle_min,
            angle_max: self.angle_max,
            direction,
            sibling: self.sibling,
            child: self.child,
        })
    }
}

impl TryFrom<ModelDocument> for Model {
    type Error = ModelError;

    fn try_from(document: ModelDocument) -> Result<Self> {
        let surface_mode = SurfaceMode::from_code(document.surface_mode)
            .ok_or(ModelError::InvalidSurfaceMode(document.surface_mode))?;

        let segments = document
            .segments
            .into_iter()
            .enumerate()
            .map(|(index, segment)| segment.into_segment(index))
            .collect::<Result<Vec<_>>>()?;

        let vertices = document.vertices.into_iter().map(Vec3::from_array).collect();

        Model::new(vertices, segments, document.root, surface_mode)
    }
}

impl Model {
    /// Parse and validate a model from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let document: ModelDocument = serde_json::from_str(text)?;
        let model = Model::try_from(document)?;
        debug!("Imported model with {} segments", model.segment_count());
        Ok(model)
    }

    /// Parse and validate a model from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: ModelDocument = serde_json::from_reader(reader)?;
        let model = Model::try_from(document)?;
        debug!("Imported model with {} segments", model.segment_count());
        Ok(model)
    }

    /// Load a model from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&ModelDocument::from(self))?)
    }

    /// Indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&ModelDocument::from(self))?)
    }

    /// Write indented JSON to a writer
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, &ModelDocument::from(self))?;
        Ok(())
    }

    /// Save the model to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
