use crate::spec::model::{
    ChannelDef, DomainDef, MarkDef, MarkKindDef, MarkPath, ScaleDef, SpecDef, TransformDef,
};
use std::collections::HashSet;
use std::fmt;

/// One step of a JSON path such as `$.visual.shapes[0].from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PathStep {
    Field(&'static str),
    Key(String),
    Index(usize),
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Field(name) => write!(f, ".{name}"),
            PathStep::Key(name) => write!(f, ".{name}"),
            PathStep::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// A located problem in a chart document.
#[derive(Debug, Clone)]
pub(crate) struct Problem {
    pub(crate) path: Vec<PathStep>,
    pub(crate) message: String,
}

impl Problem {
    fn at(path: &[PathStep], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.path.is_empty() {
            f.write_str("$")?;
            for step in &self.path {
                write!(f, "{step}")?;
            }
            f.write_str(": ")?;
        }
        f.write_str(&self.message)
    }
}

/// Every problem found in one validation pass, one per line when displayed.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", join_lines(.errors))]
pub(crate) struct Problems {
    pub(crate) errors: Vec<Problem>,
}

fn join_lines(errors: &[Problem]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Channels each mark type understands, and which of them are required.
struct ChannelRules {
    known: &'static [&'static str],
    /// Every listed channel must be present.
    required_all: &'static [&'static str],
    /// At least one listed channel must be present (ignored when empty).
    required_any: &'static [&'static str],
    paint: &'static [&'static str],
    literal_numbers: &'static [&'static str],
}

fn rules(kind: MarkKindDef) -> ChannelRules {
    match kind {
        MarkKindDef::Line => ChannelRules {
            known: &["x", "y", "stroke", "strokeWidth", "interpolate"],
            required_all: &["x", "y"],
            required_any: &[],
            paint: &["stroke"],
            literal_numbers: &["strokeWidth"],
        },
        MarkKindDef::Bar => ChannelRules {
            known: &["x", "y", "width", "height", "fill"],
            required_all: &[],
            required_any: &["x", "y"],
            paint: &["fill"],
            literal_numbers: &[],
        },
        MarkKindDef::Point => ChannelRules {
            known: &["x", "y", "color", "size"],
            required_all: &["x", "y"],
            required_any: &[],
            paint: &["color"],
            literal_numbers: &[],
        },
        MarkKindDef::Pie => ChannelRules {
            known: &["value", "padAngle", "innerRadius", "outerRadius", "fill"],
            required_all: &["value"],
            required_any: &[],
            paint: &["fill"],
            literal_numbers: &["padAngle", "innerRadius"],
        },
    }
}

pub(crate) fn validate_spec(def: &SpecDef) -> Result<(), Problems> {
    let mut errors = Vec::new();

    let d = def.dimensions;
    if !(d.width.is_finite() && d.width > 0.0) {
        errors.push(Problem::at(
            &[
                PathStep::Field("dimensions"),
                PathStep::Field("width"),
            ],
            "width must be positive",
        ));
    }
    if !(d.height.is_finite() && d.height > 0.0) {
        errors.push(Problem::at(
            &[
                PathStep::Field("dimensions"),
                PathStep::Field("height"),
            ],
            "height must be positive",
        ));
    }

    let data_names = validate_data(def, &mut errors);
    let scale_names = validate_scales(def, &data_names, &mut errors);

    for (i, axis) in def.visual.axes.iter().enumerate() {
        if !scale_names.contains(axis.scale.as_str()) {
            errors.push(Problem::at(
                &[
                    PathStep::Field("visual"),
                    PathStep::Field("axes"),
                    PathStep::Index(i),
                    PathStep::Field("scale"),
                ],
                format!("unknown scale '{}'", axis.scale),
            ));
        }
    }

    for (at, mark) in def.all_marks() {
        let path = match at {
            MarkPath::Shape(i) => vec![
                PathStep::Field("visual"),
                PathStep::Field("shapes"),
                PathStep::Index(i),
            ],
            MarkPath::Legacy(i) => vec![
                PathStep::Field("marks"),
                PathStep::Index(i),
            ],
        };
        validate_mark(&mark, at, path, &data_names, &scale_names, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Problems { errors })
    }
}

fn validate_data<'a>(def: &'a SpecDef, errors: &mut Vec<Problem>) -> HashSet<&'a str> {
    let mut names = HashSet::new();
    for (i, data) in def.data.iter().enumerate() {
        let path = [PathStep::Field("data"), PathStep::Index(i)];
        if data.name.is_empty() {
            errors.push(Problem::at(&path, "data source name must be non-empty"));
        } else if !names.insert(data.name.as_str()) {
            errors.push(Problem::at(
                &path,
                format!("duplicate data source name '{}'", data.name),
            ));
        }
        for (j, t) in data.transform.iter().enumerate() {
            let mut tpath = path.to_vec();
            tpath.push(PathStep::Field("transform"));
            tpath.push(PathStep::Index(j));
            match t {
                TransformDef::Map { output, .. } | TransformDef::Group { output, .. }
                    if output.is_empty() =>
                {
                    errors.push(Problem::at(&tpath, "output must be non-empty"));
                }
                TransformDef::Group { by, .. } if by.is_empty() => {
                    errors.push(Problem::at(&tpath, "group 'by' must be non-empty"));
                }
                _ => {}
            }
        }
    }
    names
}

fn validate_scales<'a>(
    def: &'a SpecDef,
    data_names: &HashSet<&str>,
    errors: &mut Vec<Problem>,
) -> HashSet<&'a str> {
    let mut names = HashSet::new();
    for (i, scale) in def.scales.iter().enumerate() {
        let path = [PathStep::Field("scales"), PathStep::Index(i)];
        if !names.insert(scale.name()) {
            errors.push(Problem::at(
                &path,
                format!("duplicate scale name '{}'", scale.name()),
            ));
        }

        let mut dpath = path.to_vec();
        dpath.push(PathStep::Field("domain"));
        match (scale, scale.domain()) {
            (_, DomainDef::Data { data, .. }) => {
                if !data_names.contains(data.as_str()) {
                    errors.push(Problem::at(
                        &dpath,
                        format!("unknown data source '{data}'"),
                    ));
                }
            }
            (ScaleDef::Band(_), DomainDef::Literal(_)) => {}
            (_, DomainDef::Literal(values)) => {
                if values.len() != 2 || values.iter().any(|v| v.as_number().is_none()) {
                    errors.push(Problem::at(
                        &dpath,
                        format!(
                            "{} scale literal domain must be two numbers",
                            scale.kind_str()
                        ),
                    ));
                }
            }
        }

        let [r0, r1] = scale.range();
        if !(r0.is_finite() && r1.is_finite()) {
            let mut rpath = path.to_vec();
            rpath.push(PathStep::Field("range"));
            errors.push(Problem::at(&rpath, "range must be finite"));
        }

        if let ScaleDef::Band(b) = scale
            && !(0.0..1.0).contains(&b.padding)
        {
            let mut ppath = path.to_vec();
            ppath.push(PathStep::Field("padding"));
            errors.push(Problem::at(&ppath, "padding must be in [0, 1)"));
        }
    }
    names
}

fn validate_mark(
    mark: &MarkDef,
    at: MarkPath,
    path: Vec<PathStep>,
    data_names: &HashSet<&str>,
    scale_names: &HashSet<&str>,
    errors: &mut Vec<Problem>,
) {
    if !data_names.contains(mark.from.as_str()) {
        let mut p = path.clone();
        p.push(PathStep::Field("from"));
        errors.push(Problem::at(
            &p,
            format!("unknown data source '{}'", mark.from),
        ));
    }

    let mut props_path = path.clone();
    match at {
        MarkPath::Shape(_) => props_path.push(PathStep::Field("properties")),
        MarkPath::Legacy(_) => {
            props_path.push(PathStep::Field("on"));
            props_path.push(PathStep::Field("update"));
        }
    }

    let r = rules(mark.kind);
    for name in r.required_all {
        if !mark.properties.contains_key(*name) {
            errors.push(Problem::at(
                &props_path,
                format!("{} mark requires '{name}'", mark.kind.as_str()),
            ));
        }
    }
    if !r.required_any.is_empty() && !r.required_any.iter().any(|n| mark.properties.contains_key(*n))
    {
        errors.push(Problem::at(
            &props_path,
            format!(
                "{} mark requires one of {}",
                mark.kind.as_str(),
                r.required_any.join(", ")
            ),
        ));
    }

    for (name, channel) in &mark.properties {
        let mut p = props_path.clone();
        p.push(PathStep::Key(name.clone()));

        if !r.known.contains(&name.as_str()) {
            errors.push(Problem::at(
                &p,
                format!("unknown property for {} mark", mark.kind.as_str()),
            ));
            continue;
        }

        if let Some(scale) = channel.scale() {
            if r.paint.contains(&name.as_str()) {
                errors.push(Problem::at(&p, "paint properties do not take a scale"));
            } else if !scale_names.contains(scale) {
                errors.push(Problem::at(&p, format!("unknown scale '{scale}'")));
            }
        }

        if r.literal_numbers.contains(&name.as_str()) {
            match channel {
                ChannelDef::Literal(v) if v.as_number().is_some_and(|n| n >= 0.0) => {}
                _ => errors.push(Problem::at(&p, "must be a non-negative number")),
            }
        }

        if name == "interpolate" {
            match channel {
                ChannelDef::Literal(v) if v.as_text() == Some("linear") => {}
                _ => errors.push(Problem::at(&p, "only 'linear' interpolation is supported")),
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spec/validate.rs"]
mod tests;
