//! End-to-end resolution scenarios

use isotile_autotile::classify::cardinal::{E, N, S};
use isotile_autotile::{AutoTileResolver, TerrainRegistry, VariantManifest};
use isotile_core::{Coordinate, TerrainGrid, TerrainType, TileKind};

use TerrainType::{Cliff, Dirt, Grass, Sand};

fn grid(cells: &[(i32, i32, TerrainType)]) -> TerrainGrid {
    cells
        .iter()
        .map(|&(x, y, t)| (Coordinate::new(x, y), t))
        .collect()
}

fn resolver() -> AutoTileResolver {
    AutoTileResolver::new(TerrainRegistry::default())
}

#[test]
fn corner_from_two_same_terrain_neighbors() {
    let g = grid(&[(0, 0, Grass), (1, 0, Grass), (0, 1, Grass)]);
    let r = resolver();

    assert_eq!(r.connectivity_mask(&g, Coordinate::new(0, 0), 0), E | S);
    let tile = r.resolve_cell(&g, &VariantManifest::new(), 0, 0, Grass);
    assert_eq!(tile.base.kind, TileKind::CornerSe);
    assert_eq!(tile.base.asset_key, "grass_corner_se_0");
    assert!(tile.overlay.is_none());
}

#[test]
fn higher_tier_cell_among_lower_neighbors_is_isolated() {
    let g = grid(&[
        (0, 0, Dirt),
        (0, -1, Grass),
        (1, 0, Grass),
        (0, 1, Grass),
        (-1, 0, Grass),
    ]);
    let tile = resolver().resolve_cell(&g, &VariantManifest::new(), 0, 0, Dirt);

    assert_eq!(tile.base.kind, TileKind::Isolated);
    // No isolated art in an empty manifest: drawn as full
    assert_eq!(tile.base.asset_key, "dirt_full_0");
    assert!(tile.overlay.is_none());
}

#[test]
fn lower_tier_cell_gets_overlay_edge() {
    let g = grid(&[
        (0, 0, Grass),
        (0, -1, Dirt),
        (1, 0, Grass),
        (0, 1, Grass),
        (-1, 0, Grass),
    ]);
    let r = resolver();

    assert_eq!(r.connectivity_mask(&g, Coordinate::new(0, 0), 1), N);
    let tile = r.resolve_cell(&g, &VariantManifest::new(), 0, 0, Grass);
    assert_eq!(tile.base.kind, TileKind::Full);

    let overlay = tile.overlay.expect("dirt should bleed into grass");
    assert_eq!(overlay.kind, TileKind::EdgeN);
    assert_eq!(overlay.asset_key, "dirt_edge_n_0");
    assert_eq!(overlay.variant_seed, tile.base.variant_seed);
}

#[test]
fn isolated_request_falls_back_to_full_variants() {
    let mut manifest = VariantManifest::new();
    manifest.set(Sand, TileKind::Isolated, 0);
    manifest.set(Sand, TileKind::Full, 3);

    // Cells two apart never touch
    let g: TerrainGrid = (-10..10)
        .map(|i| (Coordinate::new(i * 2, 0), Sand))
        .collect();
    let r = resolver();
    for x in (-10..10).map(|i| i * 2) {
        let tile = r.resolve_cell(&g, &manifest, x, 0, Sand);
        assert_eq!(tile.base.kind, TileKind::Isolated);
        assert!(
            ["sand_full_0", "sand_full_1", "sand_full_2"].contains(&tile.base.asset_key.as_str()),
            "unexpected key {}",
            tile.base.asset_key
        );
    }
}

#[test]
fn lone_cell_is_isolated_for_every_terrain() {
    let r = resolver();
    for terrain in TerrainType::ALL {
        let g = grid(&[(4, 4, terrain)]);
        let tile = r.resolve_cell(&g, &VariantManifest::new(), 4, 4, terrain);
        assert_eq!(tile.base.kind, TileKind::Isolated, "{terrain}");
        assert!(tile.overlay.is_none());
    }
}

#[test]
fn cliff_never_receives_overlay() {
    let g = grid(&[
        (0, 0, Cliff),
        (0, -1, Sand),
        (1, 0, Dirt),
        (0, 1, Cliff),
    ]);
    let tile = resolver().resolve_cell(&g, &VariantManifest::new(), 0, 0, Cliff);
    assert_eq!(tile.base.kind, TileKind::EdgeS);
    assert!(tile.overlay.is_none());
}

#[test]
fn variants_follow_the_manifest() {
    let mut manifest = VariantManifest::new();
    manifest.set(Grass, TileKind::Full, 5);

    let mut g = TerrainGrid::new();
    for y in -3..=3 {
        for x in -3..=3 {
            g.set(Coordinate::new(x, y), Grass);
        }
    }

    let r = resolver();
    let mut used = std::collections::HashSet::new();
    for y in -2..=2 {
        for x in -2..=2 {
            let tile = r.resolve_cell(&g, &manifest, x, y, Grass);
            assert_eq!(tile.base.kind, TileKind::Full);
            used.insert(tile.base.asset_key);
        }
    }
    assert!(used.iter().all(|k| k.starts_with("grass_full_")));
    assert!(used.len() > 1, "25 interior cells all picked the same variant");
}

#[test]
fn custom_registry_changes_dominance() {
    let registry = TerrainRegistry::from_toml_str(
        r#"
[terrain.grass]
tier = 2
walkable = true
blocks_vision = false
movement_cost = 1

[terrain.dirt]
tier = 0
walkable = true
blocks_vision = false
movement_cost = 1

[terrain.sand]
tier = 1
walkable = true
blocks_vision = false
movement_cost = 2

[terrain.cliff]
tier = 10
walkable = false
blocks_vision = true
movement_cost = 999
"#,
    )
    .unwrap();
    let r = AutoTileResolver::new(registry);

    // Grass now outranks dirt, so grass bleeds into dirt
    let g = grid(&[(0, 0, Dirt), (1, 0, Grass)]);
    let tile = r.resolve_cell(&g, &VariantManifest::new(), 0, 0, Dirt);
    assert_eq!(tile.base.kind, TileKind::EdgeE);
    assert_eq!(tile.overlay.map(|o| o.asset_key), Some("grass_edge_e_0".to_string()));
}

#[test]
fn resolved_tiles_serialize_without_empty_overlay() {
    let g = grid(&[(0, 0, Grass)]);
    let tile = resolver().resolve_cell(&g, &VariantManifest::new(), 0, 0, Grass);
    let json = serde_json::to_string(&tile).unwrap();
    assert!(!json.contains("overlay"));
    assert!(json.contains("\"kind\":\"isolated\""));
}
