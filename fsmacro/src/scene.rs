//! This module implements scene commands: tab switching, saved views,
//! and the solver colormaps.

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::{token_enum, Switch};

/// Appends the command to resize the view in the scene.
pub fn view_resize(script: &mut Script) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Resizing the view in the scene").line("VIEW_RESIZE")
  );
  return Ok(());
}

token_enum!(
  /// The scene tabs of the external program.
  SceneTab,
  { "The CAD scene.", Cad, "CAD" },
  { "The geometry scene.", Geometry, "GEOMETRY" },
  { "The solver scene.", Solver, "SOLVER" },
  { "The plots scene.", Plots, "PLOTS" },
);

/// Appends the command to change to another scene tab.
pub fn change_scene_to(
  script: &mut Script,
  scene: SceneTab
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Change the Scene To")
      .line(format_args!("CHANGE_SCENE_TO_{}", scene))
  );
  return Ok(());
}

token_enum!(
  /// The saved scene views.
  SceneView,
  { "The default view.", DefaultView, "DEFAULTVIEW" },
  { "XY plane, positive side.", XyPositive, "XY_POSITIVE" },
  { "XY plane, negative side.", XyNegative, "XY_NEGATIVE" },
  { "XZ plane, positive side.", XzPositive, "XZ_POSITIVE" },
  { "XZ plane, negative side.", XzNegative, "XZ_NEGATIVE" },
  { "YZ plane, positive side.", YzPositive, "YZ_POSITIVE" },
  { "YZ plane, negative side.", YzNegative, "YZ_NEGATIVE" },
);

/// Appends the command to snap the scene to a saved view.
pub fn set_scene_view(
  script: &mut Script,
  view: SceneView
) -> Result<(), MacroError> {
  script.append_block(
    Block::new(format!("Setting Scene to {}", view))
      .line(format_args!("SET_SCENE_{}", view))
  );
  return Ok(());
}

token_enum!(
  /// Which of the two scene colormaps a command applies to.
  Colormap,
  { "The primary colormap.", Primary, "PRIMARY" },
  { "The secondary colormap.", Secondary, "SECONDARY" },
);

token_enum!(
  /// The colormap palettes on offer.
  ColormapType,
  { "Standard rainbow.", RainbowStandard, "RAINBOW_STANDARD" },
  { "Grayscale.", Grayscale, "GRAYSCALE" },
  { "Bent hot-cool.", BentHotcool, "BENT_HOTCOOL" },
  { "Standard blackbody.", BlackbodyStandard, "BLACKBODY_STANDARD" },
  { "Extended blackbody.", BlackbodyExtended, "BLACKBODY_EXTENDED" },
  { "Kindlmann.", Kindlmann, "KINDLMANN" },
  { "Long rainbow.", RainbowLong, "RAINBOW_LONG" },
  { "Brown-blue.", BrownBlue, "BROWNBLUE" },
  { "Hot-cool.", Hotcool, "HOTCOOL" },
);

/// Appends the command to set a scene colormap's palette.
pub fn set_scene_colormap_type(
  script: &mut Script,
  colormap: Colormap,
  palette: ColormapType
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set solver colormap type")
      .line("SET_SCENE_COLORMAP_TYPE")
      .kv("COLORMAP", colormap)
      .kv("TYPE", palette)
  );
  return Ok(());
}

/// Appends the command to set a scene colormap's size, in pixels.
pub fn set_scene_colormap_size(
  script: &mut Script,
  colormap: Colormap,
  thickness: u32,
  height: u32
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set solver colormap size")
      .line("SET_SCENE_COLORMAP_SIZE")
      .kv("COLORMAP", colormap)
      .kv("THICKNESS", thickness)
      .kv("HEIGHT", height)
  );
  return Ok(());
}

/// Appends the command to set a scene colormap's position, in pixels.
pub fn set_scene_colormap_position(
  script: &mut Script,
  colormap: Colormap,
  x: u32,
  y: u32
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set solver colormap position")
      .line("SET_SCENE_COLORMAP_POSITION")
      .kv("COLORMAP", colormap)
      .kv("X", x)
      .kv("Y", y)
  );
  return Ok(());
}

/// Appends the command to set a scene colormap's shading options.
pub fn set_scene_colormap_shading(
  script: &mut Script,
  colormap: Colormap,
  reverse: Switch,
  smooth: Switch
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set solver colormap shading")
      .line("SET_SCENE_COLORMAP_SHADING")
      .kv("COLORMAP", colormap)
      .kv("REVERSE", reverse)
      .kv("SMOOTH", smooth)
  );
  return Ok(());
}

/// Appends the command to toggle a scene colormap's custom range mode.
pub fn set_scene_colormap_custom_mode(
  script: &mut Script,
  colormap: Colormap,
  custom_range: Switch
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set solver colormap custom range mode")
      .line("SET_SCENE_COLORMAP_CUSTOM_MODE")
      .kv("COLORMAP", colormap)
      .kv("CUSTOM_RANGE", custom_range)
  );
  return Ok(());
}

token_enum!(
  /// Cut-off treatments for values outside a custom colormap range.
  CutOffMode,
  { "No cut-off.", Off, "OFF" },
  { "Cut off both sides.", AboveAndBelow, "ABOVE_AND_BELOW" },
  { "Cut off above the maximum.", AboveMax, "ABOVE_MAX" },
  { "Cut off below the minimum.", BelowMin, "BELOW_MIN" },
);

/// Appends the command to set a scene colormap's custom range.
pub fn set_scene_colormap_custom_range(
  script: &mut Script,
  colormap: Colormap,
  cut_off_mode: CutOffMode,
  maximum: f64,
  minimum: f64
) -> Result<(), MacroError> {
  if maximum <= minimum {
    return Err(MacroError::InvalidArgument(format!(
      "`maximum` should be greater than `minimum`, got {} <= {}",
      maximum, minimum
    )));
  }
  script.append_block(
    Block::new("Set solver colormap custom range")
      .line("SET_SCENE_COLORMAP_CUSTOM_RANGE")
      .kv("COLORMAP", colormap)
      .kv("CUT_OFF_MODE", cut_off_mode)
      .kv("MAXIMUM", maximum)
      .kv("MINIMUM", minimum)
  );
  return Ok(());
}
