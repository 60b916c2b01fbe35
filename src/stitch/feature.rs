use crate::error::StitchError;
use crate::geometry::polyline::Polyline;
use crate::geometry::site::Site;

pub trait LineIdTrait: Copy + Eq + Ord + std::fmt::Display {}
impl<T> LineIdTrait for T where T: Copy + Eq + Ord + std::fmt::Display {}

/// A line feature of the source network.
///
/// Identity is caller-supplied and must be unique and stable for the whole
/// run. The geometry is read-only for the stitcher.
#[derive(Debug, Clone)]
pub struct LineFeature<ID>
where
    ID: LineIdTrait,
{
    id: ID,
    geometry: Polyline,
}

impl<ID> LineFeature<ID>
where
    ID: LineIdTrait,
{
    /// Create a line feature from an id and its ordered coordinates.
    /// Fewer than two coordinates leave the endpoints undefined and are
    /// rejected.
    pub fn new(id: ID, sites: Vec<Site>) -> Result<Self, StitchError> {
        let geometry = Polyline::new(sites).ok_or(StitchError::DegenerateGeometry {
            line: id.to_string(),
        })?;
        Ok(Self { id, geometry })
    }

    pub fn id(&self) -> ID {
        self.id
    }

    pub fn geometry(&self) -> &Polyline {
        &self.geometry
    }
}

/// Synthesized non-geometric attributes of an artificial line.
///
/// Descriptive fields the source data carries for real lines have no
/// meaningful value for a synthesized connector, so they are filled with a
/// placeholder and a zero length.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticAttributes {
    pub name: String,
    pub descriptor: String,
    pub length: f64,
}

/// A connector accepted into the output network.
///
/// Joins the end point of the source (no-successor) line to the start point
/// of the destination (no-predecessor) line with a straight segment.
/// Identity is the composite (source, destination) pair.
#[derive(Debug, Clone)]
pub struct ArtificialLine<ID>
where
    ID: LineIdTrait,
{
    source: ID,
    destination: ID,
    geometry: Polyline,
    angle: f64,
    angle_art: f64,
}

impl<ID> ArtificialLine<ID>
where
    ID: LineIdTrait,
{
    pub(crate) fn new(
        source: ID,
        destination: ID,
        geometry: Polyline,
        angle: f64,
        angle_art: f64,
    ) -> Self {
        Self {
            source,
            destination,
            geometry,
            angle,
            angle_art,
        }
    }

    /// Id of the no-successor line the connector leaves.
    pub fn source(&self) -> ID {
        self.source
    }

    /// Id of the no-predecessor line the connector reaches.
    pub fn destination(&self) -> ID {
        self.destination
    }

    pub fn geometry(&self) -> &Polyline {
        &self.geometry
    }

    /// Bearing deviation between the joined lines, in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Bearing deviation between the connector and the destination line,
    /// in degrees.
    pub fn angle_art(&self) -> f64 {
        self.angle_art
    }

    /// Synthesize the default attribute values for the connector.
    pub fn attributes(&self) -> SyntheticAttributes {
        SyntheticAttributes {
            name: format!("Artificial_{}_{}", self.source, self.destination),
            descriptor: "_".to_string(),
            length: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_rejects_degenerate_geometry() {
        let result = LineFeature::new(7, vec![Site::new(0.0, 0.0)]);
        assert_eq!(
            result.unwrap_err(),
            StitchError::DegenerateGeometry {
                line: "7".to_string()
            }
        );
    }

    #[test]
    fn test_artificial_line_attributes() {
        let geometry =
            Polyline::new(vec![Site::new(0.0, 0.0), Site::new(1.0, 0.0)]).unwrap();
        let line = ArtificialLine::new(3, 11, geometry, 1.0, 0.5);
        let attributes = line.attributes();
        assert_eq!(attributes.name, "Artificial_3_11");
        assert_eq!(attributes.descriptor, "_");
        assert_eq!(attributes.length, 0.0);
    }
}
