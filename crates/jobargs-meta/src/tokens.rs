//! Recognized option keys and token vocabularies
//!
//! Every closed token domain is a typed enum. Its `TOKENS` table is what the
//! option schemas validate against, so the default dictionaries, the token
//! registry and the resolved records cannot drift apart.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Sentinel token for optional features that are switched off.
pub const NONE: &str = "none";

/// Keys recognized by the export dictionary.
pub mod export_keys {
    pub const CHASER: &str = "chaser";
    pub const CHASER_ARGS: &str = "chaserArgs";
    pub const COMPATIBILITY: &str = "compatibility";
    pub const DEFAULT_CAMERAS: &str = "defaultCameras";
    pub const DEFAULT_MESH_SCHEME: &str = "defaultMeshScheme";
    pub const DEFAULT_USD_FORMAT: &str = "defaultUSDFormat";
    pub const EULER_FILTER: &str = "eulerFilter";
    pub const EXPORT_COLLECTION_BASED_BINDINGS: &str = "exportCollectionBasedBindings";
    pub const EXPORT_COLOR_SETS: &str = "exportColorSets";
    pub const EXPORT_DISPLAY_COLOR: &str = "exportDisplayColor";
    pub const EXPORT_INSTANCES: &str = "exportInstances";
    pub const EXPORT_MATERIAL_COLLECTIONS: &str = "exportMaterialCollections";
    pub const EXPORT_REFERENCE_OBJECTS: &str = "exportReferenceObjects";
    pub const EXPORT_REFS_AS_INSTANCEABLE: &str = "exportRefsAsInstanceable";
    pub const EXPORT_SKELS: &str = "exportSkels";
    pub const EXPORT_SKIN: &str = "exportSkin";
    pub const EXPORT_UVS: &str = "exportUVs";
    pub const EXPORT_VISIBILITY: &str = "exportVisibility";
    pub const KIND: &str = "kind";
    pub const MATERIAL_COLLECTIONS_PATH: &str = "materialCollectionsPath";
    pub const MATERIALS_SCOPE_NAME: &str = "materialsScopeName";
    pub const MEL_PER_FRAME_CALLBACK: &str = "melPerFrameCallback";
    pub const MEL_POST_CALLBACK: &str = "melPostCallback";
    pub const MERGE_TRANSFORM_AND_SHAPE: &str = "mergeTransformAndShape";
    pub const NORMALIZE_NURBS: &str = "normalizeNurbs";
    pub const PARENT_SCOPE: &str = "parentScope";
    pub const PYTHON_PER_FRAME_CALLBACK: &str = "pythonPerFrameCallback";
    pub const PYTHON_POST_CALLBACK: &str = "pythonPostCallback";
    pub const RENDERABLE_ONLY: &str = "renderableOnly";
    pub const RENDER_LAYER_MODE: &str = "renderLayerMode";
    pub const SHADING_MODE: &str = "shadingMode";
    pub const STRIP_NAMESPACES: &str = "stripNamespaces";
    pub const VERBOSE: &str = "verbose";
}

/// Keys recognized by the import dictionary.
pub mod import_keys {
    pub const API_SCHEMA: &str = "apiSchema";
    pub const ASSEMBLY_REP: &str = "assemblyRep";
    pub const EXCLUDE_PRIMVAR: &str = "excludePrimvar";
    pub const METADATA: &str = "metadata";
    pub const SHADING_MODE: &str = "shadingMode";
    pub const SHADING_CONVERSION: &str = "shadingConversion";
    pub const USE_AS_ANIMATION_CACHE: &str = "useAsAnimationCache";
}

/// File extensions and dialog filters understood by the translators.
pub mod translator {
    pub const USD_FILE_EXTENSION_DEFAULT: &str = "usd";
    pub const USD_FILE_EXTENSION_ASCII: &str = "usda";
    pub const USD_FILE_EXTENSION_CRATE: &str = "usdc";
    pub const USD_FILE_EXTENSION_PACKAGE: &str = "usdz";
    pub const USD_READABLE_FILE_FILTER: &str = "*.usd *.usda *.usdc *.usdz";
    pub const USD_WRITABLE_FILE_FILTER: &str = "*.usd *.usda *.usdc *.usdz";
}

/// A string that is not part of a token vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized token '{token}'")]
pub struct UnknownToken {
    pub token: String,
}

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every recognized token, in declaration order.
            pub const TOKENS: &'static [&'static str] = &[$($token),+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $token, )+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownToken;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $( $token => Ok($name::$variant), )+
                    _ => Err(UnknownToken { token: s.to_string() }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

token_enum! {
    /// Target compatibility profile for the exported layer.
    pub enum Compatibility {
        #[default]
        None => "none",
        /// Restrict output to what ARKit can consume (usdz packages).
        AppleArKit => "appleArKit",
    }
}

token_enum! {
    /// Subdivision scheme written on meshes that don't author their own.
    pub enum MeshScheme {
        #[default]
        CatmullClark => "catmullClark",
        Loop => "loop",
        Bilinear => "bilinear",
        None => "none",
    }
}

token_enum! {
    /// On-disk format of a `.usd` file.
    pub enum UsdFormat {
        #[default]
        Usdc => "usdc",
        Usda => "usda",
    }
}

impl UsdFormat {
    /// The explicit file extension for this format.
    pub fn file_extension(&self) -> &'static str {
        match self {
            UsdFormat::Usdc => translator::USD_FILE_EXTENSION_CRATE,
            UsdFormat::Usda => translator::USD_FILE_EXTENSION_ASCII,
        }
    }
}

token_enum! {
    /// Export mode for skeletons and skin clusters.
    pub enum SkelExportMode {
        #[default]
        None => "none",
        /// Export every skeleton/skin found in the selection.
        Auto => "auto",
        /// Export only what is explicitly tagged for export.
        Explicit => "explicit",
    }
}

token_enum! {
    /// Which render layer is active while exporting.
    pub enum RenderLayerMode {
        #[default]
        DefaultLayer => "defaultLayer",
        CurrentLayer => "currentLayer",
        /// One model variant per render layer.
        ModelingVariant => "modelingVariant",
    }
}

token_enum! {
    /// Shading mode used to read or write materials.
    pub enum ShadingMode {
        None => "none",
        #[default]
        DisplayColor => "displayColor",
        PxrRis => "pxrRis",
        UseRegistry => "useRegistry",
    }
}

token_enum! {
    /// How assemblies are represented on import.
    pub enum AssemblyRep {
        #[default]
        Collapsed => "Collapsed",
        Full => "Full",
        Import => "Import",
        /// Assemblies are created but left unloaded.
        Unloaded => "",
    }
}

token_enum! {
    /// Target surface shader when converting imported materials.
    pub enum ShadingConversion {
        None => "none",
        #[default]
        Lambert => "lambert",
        StandardSurface => "standardSurface",
        Blinn => "blinn",
        Phong => "phong",
    }
}
