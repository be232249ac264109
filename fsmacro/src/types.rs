//! This module implements the token sets shared across command families.
//! Each enum prints the exact spelling the external grammar expects, so
//! membership in a closed set is a type-system fact instead of a runtime
//! whitelist.

use serde::{Deserialize, Serialize};

/// Generates a token enum: documented variants, their grammar spellings,
/// an `all()` listing, and a `Display` that prints the spelling.
macro_rules! token_enum {
  (
    $(#[$meta:meta])*
    $name:ident,
    $(
      {
        $desc:literal,
        $variant:ident,
        $token:literal
      },
    )*
  ) => {
    $(#[$meta])*
    #[derive(
      Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd,
      Ord
    )]
    pub enum $name {
      $(
        #[doc = $desc]
        $variant,
      )*
    }

    impl $name {
      /// Returns all values in this token set.
      pub const fn all() -> &'static [Self] {
        return &[ $(Self::$variant,)* ];
      }

      /// Returns the spelling the external grammar expects.
      pub const fn token(&self) -> &'static str {
        return match self {
          $(Self::$variant => $token,)*
        };
      }
    }

    impl std::fmt::Display for $name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{}", self.token());
      }
    }
  };
}

pub(crate) use token_enum;

token_enum!(
  /// The enable/disable switch that shows up all over the grammar.
  Switch,
  { "Turns the option on.", Enable, "ENABLE" },
  { "Turns the option off.", Disable, "DISABLE" },
);

impl Switch {
  /// Maps a plain boolean onto the switch tokens.
  pub const fn from_bool(on: bool) -> Self {
    return if on { Self::Enable } else { Self::Disable };
  }
}

impl Default for Switch {
  fn default() -> Self {
    return Self::Enable;
  }
}

token_enum!(
  /// Length units accepted by the simulation.
  LengthUnit,
  { "Inches.", Inch, "INCH" },
  { "Millimeters.", Millimeter, "MILLIMETER" },
  { "Feet.", Feet, "FEET" },
  { "Miles.", Mile, "MILE" },
  { "Meters.", Meter, "METER" },
  { "Kilometers.", Kilometer, "KILOMETER" },
  { "Thousandths of an inch.", Mils, "MILS" },
  { "Micrometers.", Micron, "MICRON" },
  { "Centimeters.", Centimeter, "CENTIMETER" },
  { "Millionths of an inch.", Microinch, "MICROINCH" },
);

impl Default for LengthUnit {
  fn default() -> Self {
    return Self::Meter;
  }
}

token_enum!(
  /// Units for aerodynamic loads and moments.
  ForceUnit,
  { "Non-dimensional coefficients.", Coefficients, "COEFFICIENTS" },
  { "Newtons.", Newtons, "NEWTONS" },
  { "Kilonewtons.", KiloNewtons, "KILO-NEWTONS" },
  { "Pound-force.", PoundForce, "POUND-FORCE" },
  { "Kilogram-force.", KilogramForce, "KILOGRAM-FORCE" },
);

impl Default for ForceUnit {
  fn default() -> Self {
    return Self::Newtons;
  }
}

token_enum!(
  /// A directional axis, encoded as 1/2/3 in the grammar.
  Axis,
  { "The X axis.", X, "1" },
  { "The Y axis.", Y, "2" },
  { "The Z axis.", Z, "3" },
);

token_enum!(
  /// A directional axis, spelled out by letter where the grammar wants
  /// that instead of the 1/2/3 encoding.
  NamedAxis,
  { "The X axis.", X, "X" },
  { "The Y axis.", Y, "Y" },
  { "The Z axis.", Z, "Z" },
);

token_enum!(
  /// A coordinate plane of a frame, used by section-type commands.
  SectionPlane,
  { "The XY plane.", Xy, "XY" },
  { "The XZ plane.", Xz, "XZ" },
  { "The YZ plane.", Yz, "YZ" },
);

token_enum!(
  /// Force and moment quantities used by plots and user-defined
  /// coefficients.
  LoadParameter,
  { "Lift coefficient.", Cl, "CL" },
  { "Induced drag coefficient.", Cdi, "CDI" },
  { "Zero-lift drag coefficient.", Cdo, "CDO" },
  { "Total drag coefficient.", Cd, "CD" },
  { "Force along X.", ForceX, "FORCE_X" },
  { "Force along Y.", ForceY, "FORCE_Y" },
  { "Force along Z.", ForceZ, "FORCE_Z" },
  { "Moment about X.", MomentX, "MOMENT_X" },
  { "Moment about Y.", MomentY, "MOMENT_Y" },
  { "Moment about Z.", MomentZ, "MOMENT_Z" },
);

/// A selection of mesh boundaries: everything, or an explicit index
/// list. The grammar spells "everything" as a count of -1.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BoundaryList {
  /// All boundaries.
  All,
  /// An explicit list of boundary indices.
  Listed(Vec<u32>)
}

impl BoundaryList {
  /// The count the grammar wants on the command line: -1 for all,
  /// the list length otherwise.
  pub fn count(&self) -> i64 {
    return match self {
      BoundaryList::All => -1,
      BoundaryList::Listed(v) => v.len() as i64
    };
  }

  /// The listed indices; empty when everything is selected.
  pub fn indices(&self) -> &[u32] {
    return match self {
      BoundaryList::All => &[],
      BoundaryList::Listed(v) => v.as_slice()
    };
  }
}
