//! Wall materials and the fixed material catalog.

use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};

/// An exchanger wall material.
///
/// Materials are immutable. Selecting a different material replaces the
/// whole value.
///
/// `Material` is `Copy` so snapshots can be stored and compared by value.
/// Its name and color are therefore `&'static str`: custom materials take
/// compile-time labels, and runtime selections (a parsed widget value, say)
/// go through [`MaterialKind`]'s [`FromStr`] to reach the catalog.
///
/// ```
/// use twine_hx_explorer::models::thermal::exchanger::{Material, MaterialKind};
///
/// let selected = "steel".parse::<MaterialKind>().map(Material::from).unwrap();
/// assert_eq!(selected.name, "Steel");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub name: &'static str,
    pub thermal_conductivity: ThermalConductivity,

    /// CSS color used to draw the exchanger body.
    pub display_color: &'static str,
}

impl Material {
    /// Creates a material outside the built-in catalog.
    ///
    /// The conductivity is checked when the engine runs, not here.
    #[must_use]
    pub fn new(
        name: &'static str,
        thermal_conductivity: ThermalConductivity,
        display_color: &'static str,
    ) -> Self {
        Self {
            name,
            thermal_conductivity,
            display_color,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        MaterialKind::Copper.material()
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The built-in material catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    Copper,
    Silver,
    Steel,
    Graphite,
    Glass,
    Pvc,
}

impl MaterialKind {
    /// Every catalog entry, in selector order.
    pub const ALL: [Self; 6] = [
        Self::Copper,
        Self::Silver,
        Self::Steel,
        Self::Graphite,
        Self::Glass,
        Self::Pvc,
    ];

    /// Display name, also accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Copper => "Copper",
            Self::Silver => "Silver",
            Self::Steel => "Steel",
            Self::Graphite => "Graphite",
            Self::Glass => "Glass",
            Self::Pvc => "PVC",
        }
    }

    /// The catalog record for this entry.
    #[must_use]
    pub fn material(self) -> Material {
        let (k, color) = match self {
            Self::Copper => (401.0, "#b87333"),
            Self::Silver => (429.0, "#c0c0c0"),
            Self::Steel => (50.0, "#71797e"),
            Self::Graphite => (150.0, "#383838"),
            Self::Glass => (1.05, "#a8ccd7"),
            Self::Pvc => (0.19, "#f0f0f0"),
        };
        Material::new(
            self.name(),
            ThermalConductivity::new::<watt_per_meter_kelvin>(k),
            color,
        )
    }
}

impl From<MaterialKind> for Material {
    fn from(kind: MaterialKind) -> Self {
        kind.material()
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name does not match any catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown material: {0:?}")]
pub struct UnknownMaterial(pub String);

impl FromStr for MaterialKind {
    type Err = UnknownMaterial;

    /// Parses a catalog name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownMaterial(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn copper_is_the_default() {
        let material = Material::default();
        assert_eq!(material.name, "Copper");
        assert_relative_eq!(
            material.thermal_conductivity.get::<watt_per_meter_kelvin>(),
            401.0
        );
    }

    #[test]
    fn catalog_conductivities_are_positive() {
        for kind in MaterialKind::ALL {
            let k = kind.material().thermal_conductivity;
            assert!(k.get::<watt_per_meter_kelvin>() > 0.0, "{kind}");
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("copper".parse::<MaterialKind>(), Ok(MaterialKind::Copper));
        assert_eq!(" PVC ".parse::<MaterialKind>(), Ok(MaterialKind::Pvc));
        assert_eq!("Graphite".parse::<MaterialKind>(), Ok(MaterialKind::Graphite));
        assert_eq!(
            "Unobtainium".parse::<MaterialKind>(),
            Err(UnknownMaterial("Unobtainium".to_owned()))
        );
    }

    #[test]
    fn widget_values_resolve_to_catalog_records() {
        let selected: Material = " glass".parse::<MaterialKind>().unwrap().into();
        assert_eq!(selected, MaterialKind::Glass.material());
        assert_eq!(selected.display_color, "#a8ccd7");
    }

        #[test]
    fn names_round_trip_through_display() {
        for kind in MaterialKind::ALL {
            assert_eq!(kind.to_string().parse::<MaterialKind>(), Ok(kind));
        }
    }
}
