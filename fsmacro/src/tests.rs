use std::fs;
use std::path::Path;

use crate::block::{join_csv, join_spaced, Block};
use crate::errors::MacroError;
use crate::prelude::*;
use crate::validate;

fn border() -> String {
  return format!("#{}", "*".repeat(72));
}

#[test]
fn test_append_order_preserved() {
  let mut batched = Script::new();
  batched.append_lines(["a", "b"]);
  batched.append_lines(["c"]);
  let mut single = Script::new();
  single.append_line("a");
  single.append_line("b");
  single.append_line("c");
  assert_eq!(batched.lines(), single.lines());
  assert_eq!(batched.len(), 3);
}

#[test]
fn test_clear_lines() {
  let mut script = Script::new();
  script.append_lines(["x", "y"]);
  assert!(!script.is_empty());
  script.clear_lines();
  assert!(script.is_empty());
  assert_eq!(script.len(), 0);
}

#[test]
fn test_write_to_file_roundtrip() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(DEFAULT_SCRIPT_NAME);
  let mut script = Script::new();
  script.append_lines(["first", "second", "third"]);
  script.write_to_file(&path).unwrap();
  let written = fs::read_to_string(&path).unwrap();
  // every line followed by a newline, plus one trailing blank line
  assert_eq!(written, "first\nsecond\nthird\n\n");
}

#[test]
fn test_write_after_clear_is_near_empty() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("cleared.txt");
  let mut script = Script::new();
  script.append_lines(["something"]);
  script.clear_lines();
  script.write_to_file(&path).unwrap();
  assert_eq!(fs::read_to_string(&path).unwrap(), "\n");
}

#[test]
fn test_hard_reset_deletes_file_and_buffer() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("reset_me.txt");
  let mut script = Script::new();
  script.append_line("line");
  script.write_to_file(&path).unwrap();
  assert!(path.exists());
  script.hard_reset(&path);
  assert!(!path.exists());
  assert!(script.is_empty());
  // resetting with no file on disk is not an error
  script.append_line("again");
  script.hard_reset(&path);
  assert!(script.is_empty());
}

#[test]
fn test_banner_geometry() {
  let rendered = Block::new("Open an existing simulation file")
    .line("OPEN")
    .render();
  assert_eq!(rendered[0], border());
  assert_eq!(
    rendered[1],
    "#****************** Open an existing simulation file ********************"
  );
  assert_eq!(rendered[2], border());
  assert_eq!(rendered[3], "#");
  assert_eq!(rendered[4], "OPEN");
  // all banner lines share the same fixed width
  assert_eq!(rendered[0].len(), 73);
  assert_eq!(rendered[1].len(), 73);
}

#[test]
fn test_banner_overlong_title() {
  let long = "x".repeat(80);
  let rendered = Block::new(long.as_str()).line("CMD").render();
  assert!(rendered[1].starts_with("#****************** "));
  assert!(rendered[1].contains(&long));
}

#[test]
fn test_join_helpers() {
  assert_eq!(join_csv([1, 2, 4]), "1,2,4");
  assert_eq!(join_spaced([0.5, 0.3, 1.0]), "0.5 0.3 1");
  assert_eq!(join_csv(Vec::<u32>::new()), "");
}

#[test]
fn test_switch_tokens() {
  assert_eq!(Switch::Enable.to_string(), "ENABLE");
  assert_eq!(Switch::Disable.to_string(), "DISABLE");
  assert_eq!(Switch::from_bool(true), Switch::Enable);
  assert_eq!(Switch::from_bool(false), Switch::Disable);
  assert_eq!(Switch::all().len(), 2);
}

#[test]
fn test_unit_tokens() {
  assert_eq!(LengthUnit::Meter.to_string(), "METER");
  assert_eq!(LengthUnit::Microinch.to_string(), "MICROINCH");
  assert_eq!(ForceUnit::KiloNewtons.to_string(), "KILO-NEWTONS");
  assert_eq!(Axis::Z.to_string(), "3");
  assert_eq!(NamedAxis::Z.to_string(), "Z");
}

#[test]
fn test_validators() {
  assert!(validate::nonzero_index("i", 1).is_ok());
  assert!(validate::nonzero_index("i", 0).is_err());
  assert!(validate::index_or_all("i", -1).is_ok());
  assert!(validate::index_or_all("i", 0).is_err());
  assert!(validate::index_or_all("i", -2).is_err());
  assert!(validate::in_range("a", 90.0, 0.0, 90.0).is_ok());
  assert!(validate::in_range("a", 90.1, 0.0, 90.0).is_err());
  assert!(validate::strictly_between("a", 0.0, 0.0, 5.0).is_err());
  assert!(validate::strictly_between("a", 2.5, 0.0, 5.0).is_ok());
  assert!(validate::count_matches("l", 3, 3).is_ok());
  assert!(validate::count_matches("l", 3, 2).is_err());
  assert!(validate::existing_file(Path::new("/no/such/file")).is_err());
}

#[test]
fn test_validator_messages_name_the_parameter() {
  let err = validate::in_range("angle", 100.0, 0.0, 90.0).unwrap_err();
  let msg = err.to_string();
  assert!(msg.contains("`angle`"));
  assert!(msg.contains("[0, 90]"));
}

#[test]
fn test_invalid_argument_leaves_buffer_untouched() {
  let mut script = Script::new();
  set_trailing_edge_sweep_angle(&mut script, 45.0).unwrap();
  let len_before = script.len();
  assert!(set_trailing_edge_sweep_angle(&mut script, 100.0).is_err());
  assert!(set_prop_actuator_swirl(&mut script, 0, Switch::Enable).is_err());
  assert!(wrapper_set_input(&mut script, &[]).is_err());
  assert_eq!(script.len(), len_before);
}

#[test]
fn test_switch_command_golden() {
  let mut script = Script::new();
  set_prop_actuator_swirl(&mut script, 3, Switch::Enable).unwrap();
  assert_eq!(
    script.lines().last().unwrap(),
    "SET_PROP_ACTUATOR_SWIRL 3 ENABLE"
  );
}

#[test]
fn test_single_knob_block_golden() {
  let mut script = Script::new();
  set_significant_digits(&mut script, 5).unwrap();
  let lines = script.lines();
  assert_eq!(lines.len(), 5);
  assert_eq!(lines[3], "#");
  assert_eq!(lines[4], "SET_SIGNIFICANT_DIGITS 5");
}

#[test]
fn test_count_plus_list_golden() {
  let mut script = Script::new();
  wrapper_set_input(&mut script, &[1, 2, 4]).unwrap();
  let lines = script.lines();
  assert_eq!(lines[4], "WRAPPER_SET_INPUT 3");
  assert_eq!(lines[5], "1,2,4");
}

#[test]
fn test_kv_block_golden() {
  let mut script = Script::new();
  create_new_base_region(&mut script, 3, -0.2).unwrap();
  let lines = script.lines();
  assert_eq!(lines[4], "CREATE_NEW_BASE_REGION");
  assert_eq!(lines[5], "SURFACE 3");
  assert_eq!(lines[6], "BASE_PRESSURE_COEFFICIENT -0.2");
}

#[test]
fn test_freestream_variants() {
  let mut script = Script::new();
  set_freestream(&mut script, &Freestream::Constant).unwrap();
  assert_eq!(script.lines().last().unwrap(), "SET_FREESTREAM CONSTANT");
  script.clear_lines();
  let rotation = Freestream::Rotation {
    frame: 2,
    axis: NamedAxis::X,
    angular_velocity: -0.2
  };
  set_freestream(&mut script, &rotation).unwrap();
  assert_eq!(
    script.lines().last().unwrap(),
    "SET_FREESTREAM ROTATION 2 X -0.2"
  );
  script.clear_lines();
  let bad = Freestream::Rotation {
    frame: 0,
    axis: NamedAxis::X,
    angular_velocity: 1.0
  };
  assert!(set_freestream(&mut script, &bad).is_err());
  assert!(script.is_empty());
}

#[test]
fn test_conditional_tail_golden() {
  let mut script = Script::new();
  let model = ActuatorModel::Propeller {
    ct: Some(0.013),
    rpm: Some(7000.0),
    swirl_velocity: Switch::Enable
  };
  edit_actuator(&mut script, 1, "Prop-1", 2, Axis::X, 0.5, 1.2, &model)
    .unwrap();
  let lines = script.lines();
  assert_eq!(lines[4], "EDIT_ACTUATOR");
  assert_eq!(lines[5], "ACTUATOR 1");
  assert_eq!(lines[6], "NAME Prop-1");
  assert_eq!(lines[7], "TYPE PROPELLER");
  assert_eq!(lines[8], "FRAME 2");
  assert_eq!(lines[9], "AXIS 1");
  assert_eq!(lines[10], "OFFSET 0.5");
  assert_eq!(lines[11], "RADIUS 1.2");
  assert_eq!(lines[12], "CT 0.013");
  assert_eq!(lines[13], "RPM 7000");
  assert_eq!(lines[14], "SWIRL_VELOCITY ENABLE");
  // the jet tail omits absent fields entirely
  script.clear_lines();
  let jet = ActuatorModel::JetExhaust {
    velocity: Some(250.0),
    density: None,
    cm: None
  };
  edit_actuator(&mut script, 2, "Jet-1", 1, Axis::Y, 0.0, 0.8, &jet).unwrap();
  assert_eq!(script.lines().last().unwrap(), "VELOCITY 250");
}

#[test]
fn test_solver_init_listed_boundaries() {
  let mut script = Script::new();
  let init = SolverInit {
    surfaces: SolverSurfaces::Listed(vec![
      SolverBoundary { surface: 1, symmetry_tag: 0, wake: Switch::Enable },
      SolverBoundary { surface: 2, symmetry_tag: 0, wake: Switch::Disable }
    ]),
    ..SolverInit::default()
  };
  initialize_solver(&mut script, &init).unwrap();
  let lines = script.lines();
  assert_eq!(lines[4], "INITIALIZE_SOLVER");
  assert_eq!(lines[5], "SURFACES 2");
  assert_eq!(lines[6], "1,0,ENABLE");
  assert_eq!(lines[7], "2,0,DISABLE");
  assert_eq!(lines[8], "WAKE_TERMINATION_X DEFAULT");
  assert_eq!(lines[9], "SYMMETRY_TYPE NONE");
}

#[test]
fn test_solver_init_all_boundaries() {
  let mut script = Script::new();
  initialize_solver(&mut script, &SolverInit::default()).unwrap();
  assert!(script.lines().contains(&"SURFACES -1".to_string()));
}

#[test]
fn test_boundary_list() {
  assert_eq!(BoundaryList::All.count(), -1);
  assert!(BoundaryList::All.indices().is_empty());
  let listed = BoundaryList::Listed(vec![1, 2, 4]);
  assert_eq!(listed.count(), 3);
  assert_eq!(listed.indices(), &[1, 2, 4]);
}

#[test]
fn test_two_blocks_in_call_order() {
  let mut script = Script::new();
  create_new_simulation(&mut script).unwrap();
  stop_script(&mut script).unwrap();
  let joined = script.lines().join("\n");
  let first = joined.find("NEW_SIMULATION").unwrap();
  let second = joined.find("STOP").unwrap();
  assert!(first < second);
  // two banner blocks, back to back
  assert_eq!(
    script.lines().iter().filter(|l| *l == &border()).count(),
    4
  );
}

#[test]
fn test_unsteady_animation_variants() {
  let mut script = Script::new();
  unsteady_solver_animation(&mut script, &Animation::Disable).unwrap();
  assert_eq!(
    script.lines().last().unwrap(),
    "UNSTEADY_SOLVER_ANIMATION DISABLE"
  );
  script.clear_lines();
  let on = Animation::Enable {
    folder: "anim_out".into(),
    filetype: AnimationFiletype::ParaviewVtk,
    frequency: 5,
    volume_sections: Switch::Disable
  };
  unsteady_solver_animation(&mut script, &on).unwrap();
  let lines = script.lines();
  assert_eq!(lines[4], "UNSTEADY_SOLVER_ANIMATION ENABLE");
  assert_eq!(lines[5], "FOLDER anim_out");
  assert_eq!(lines[6], "FILETYPE PARAVIEW_VTK");
  assert_eq!(lines[7], "FREQUENCY 5");
  assert_eq!(lines[8], "VOLUME_SECTIONS DISABLE");
}

#[test]
fn test_trailing_edge_import_wants_txt() {
  let mut script = Script::new();
  let err = trailing_edges_import(&mut script, Path::new("edges.csv"));
  assert!(err.is_err());
  assert!(script.is_empty());
  trailing_edges_import(&mut script, Path::new("edges.txt")).unwrap();
  assert_eq!(script.lines().last().unwrap(), "edges.txt");
}

#[test]
fn test_runner_missing_script() {
  let dir = tempfile::tempdir().unwrap();
  let exe = dir.path().join("solver.exe");
  fs::write(&exe, "stub").unwrap();
  let missing = dir.path().join("no_script.txt");
  let err = run_script(Some(&exe), &missing, false).unwrap_err();
  match err {
    MacroError::MissingFile(p) => assert_eq!(p, missing),
    other => panic!("expected MissingFile, got {:?}", other)
  }
}

#[test]
fn test_runner_resolution() {
  let explicit = Path::new("some/solver.exe");
  assert_eq!(
    resolve_executable(Some(explicit)).unwrap(),
    explicit.to_path_buf()
  );
  if std::env::var_os(EXE_ENV_VAR).is_none() {
    assert!(matches!(
      resolve_executable(None),
      Err(MacroError::MissingExecutable)
    ));
  }
}

#[test]
fn test_scene_view_title_follows_token() {
  let mut script = Script::new();
  set_scene_view(&mut script, SceneView::XyNegative).unwrap();
  let lines = script.lines();
  assert!(lines[1].contains("Setting Scene to XY_NEGATIVE"));
  assert_eq!(lines[4], "SET_SCENE_XY_NEGATIVE");
}

#[test]
fn test_export_csv_boundary_tail() {
  let mut script = Script::new();
  export_solver_analysis_csv(
    &mut script,
    Path::new("out.csv"),
    CsvExportFormat::DifferencePressure,
    PressureUnit::Pascals,
    &BoundaryList::Listed(vec![1, 2, 3])
  ).unwrap();
  let lines = script.lines();
  assert_eq!(lines[4], "EXPORT_SOLVER_ANALYSIS_CSV");
  assert_eq!(lines[5], "out.csv");
  assert_eq!(lines[6], "FORMAT DIFFERENCE-PRESSURE");
  assert_eq!(lines[7], "UNITS PASCALS");
  assert_eq!(lines[8], "SURFACES 3");
  assert_eq!(lines[9], "1");
  assert_eq!(lines[10], "2");
  assert_eq!(lines[11], "3");
}
