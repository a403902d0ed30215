use std::fmt::Display;

/// Possible storage types for a single dimension. This is a closed set of scalar types, every dimension
/// of a `PointView` stores its values in exactly one of them
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DimensionType {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl DimensionType {
    /// All storage types, ordered by signedness and width
    pub const ALL: [DimensionType; 10] = [
        DimensionType::I8,
        DimensionType::U8,
        DimensionType::I16,
        DimensionType::U16,
        DimensionType::I32,
        DimensionType::U32,
        DimensionType::I64,
        DimensionType::U64,
        DimensionType::F32,
        DimensionType::F64,
    ];

    /// Returns the size in bytes of a single value of this type
    /// ```
    /// # use pointview_core::layout::*;
    /// assert_eq!(8, DimensionType::F64.size());
    /// assert_eq!(1, DimensionType::U8.size());
    /// ```
    pub fn size(&self) -> usize {
        match self {
            DimensionType::I8 | DimensionType::U8 => 1,
            DimensionType::I16 | DimensionType::U16 => 2,
            DimensionType::I32 | DimensionType::U32 | DimensionType::F32 => 4,
            DimensionType::I64 | DimensionType::U64 | DimensionType::F64 => 8,
        }
    }

    /// Returns the base type of this type as it appears in a schema (`signed`, `unsigned` or `floating`)
    pub fn base_name(&self) -> &'static str {
        match self {
            DimensionType::I8 | DimensionType::I16 | DimensionType::I32 | DimensionType::I64 => {
                "signed"
            }
            DimensionType::U8 | DimensionType::U16 | DimensionType::U32 | DimensionType::U64 => {
                "unsigned"
            }
            DimensionType::F32 | DimensionType::F64 => "floating",
        }
    }

    pub fn is_floating(&self) -> bool {
        matches!(self, DimensionType::F32 | DimensionType::F64)
    }
}

impl Display for DimensionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DimensionType::I8 => "i8",
            DimensionType::U8 => "u8",
            DimensionType::I16 => "i16",
            DimensionType::U16 => "u16",
            DimensionType::I32 => "i32",
            DimensionType::U32 => "u32",
            DimensionType::I64 => "i64",
            DimensionType::U64 => "u64",
            DimensionType::F32 => "f32",
            DimensionType::F64 => "f64",
        };
        write!(f, "{}", name)
    }
}

macro_rules! dimensions {
    ($($variant:ident => ($name:expr, $datatype:ident)),+ $(,)?) => {
        /// Identifier for a semantic per-point attribute. Each identifier has a stable name and a default
        /// storage type, which can be overridden through [`DimTypeId::with_custom_datatype`]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum DimensionId {
            $($variant,)+
        }

        impl DimensionId {
            /// All known dimension identifiers
            pub const ALL: &'static [DimensionId] = &[$(DimensionId::$variant,)+];

            /// Returns the stable name of this dimension
            /// ```
            /// # use pointview_core::layout::*;
            /// assert_eq!("Classification", DimensionId::Classification.name());
            /// ```
            pub fn name(&self) -> &'static str {
                match self {
                    $(DimensionId::$variant => $name,)+
                }
            }

            /// Returns the storage type that is used when this dimension is registered without an explicit type
            pub fn default_type(&self) -> DimensionType {
                match self {
                    $(DimensionId::$variant => DimensionType::$datatype,)+
                }
            }
        }
    };
}

dimensions! {
    X => ("X", F64),
    Y => ("Y", F64),
    Z => ("Z", F64),
    Intensity => ("Intensity", U16),
    Amplitude => ("Amplitude", F32),
    Reflectance => ("Reflectance", F32),
    ReturnNumber => ("ReturnNumber", U8),
    NumberOfReturns => ("NumberOfReturns", U8),
    ScanDirectionFlag => ("ScanDirectionFlag", U8),
    EdgeOfFlightLine => ("EdgeOfFlightLine", U8),
    Classification => ("Classification", U8),
    ScanAngleRank => ("ScanAngleRank", F32),
    UserData => ("UserData", U8),
    PointSourceId => ("PointSourceId", U16),
    GpsTime => ("GpsTime", F64),
    Red => ("Red", U16),
    Green => ("Green", U16),
    Blue => ("Blue", U16),
    Infrared => ("Infrared", U16),
    ScanChannel => ("ScanChannel", U8),
    ClassFlags => ("ClassFlags", U8),
    NormalX => ("NormalX", F64),
    NormalY => ("NormalY", F64),
    NormalZ => ("NormalZ", F64),
    HeightAboveGround => ("HeightAboveGround", F64),
    PointId => ("PointId", U64),
    OriginId => ("OriginId", U32),
}

impl DimensionId {
    /// Looks up a dimension by its name. The comparison ignores ASCII case
    /// ```
    /// # use pointview_core::layout::*;
    /// assert_eq!(Some(DimensionId::GpsTime), DimensionId::from_name("gpstime"));
    /// assert_eq!(None, DimensionId::from_name("NotADimension"));
    /// ```
    pub fn from_name(name: &str) -> Option<DimensionId> {
        Self::ALL
            .iter()
            .copied()
            .find(|dim| dim.name().eq_ignore_ascii_case(name))
    }
}

impl Display for DimensionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The combined (name, type) key of a dimension. This is the value that identifies a field when reading or
/// writing point data: it names the dimension together with the storage type it is declared with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimTypeId {
    id: DimensionId,
    datatype: DimensionType,
}

impl DimTypeId {
    /// Creates a new `DimTypeId` from the given dimension and storage type
    /// ```
    /// # use pointview_core::layout::*;
    /// let dim = DimTypeId::new(DimensionId::Intensity, DimensionType::F32);
    /// # assert_eq!(DimensionId::Intensity, dim.id());
    /// # assert_eq!(DimensionType::F32, dim.datatype());
    /// ```
    pub fn new(id: DimensionId, datatype: DimensionType) -> Self {
        Self { id, datatype }
    }

    pub fn id(&self) -> DimensionId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn datatype(&self) -> DimensionType {
        self.datatype
    }

    /// Returns the size in bytes of a single value of this dimension
    pub fn size(&self) -> usize {
        self.datatype.size()
    }

    /// Returns a new `DimTypeId` for the same dimension, but with a different storage type
    /// ```
    /// # use pointview_core::layout::*;
    /// let x_as_f32 = DimTypeId::from(DimensionId::X).with_custom_datatype(DimensionType::F32);
    /// # assert_eq!(DimensionId::X, x_as_f32.id());
    /// # assert_eq!(DimensionType::F32, x_as_f32.datatype());
    /// ```
    pub fn with_custom_datatype(&self, datatype: DimensionType) -> Self {
        Self {
            id: self.id,
            datatype,
        }
    }
}

impl From<DimensionId> for DimTypeId {
    fn from(id: DimensionId) -> Self {
        Self {
            id,
            datatype: id.default_type(),
        }
    }
}

impl Display for DimTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{};{}]", self.id, self.datatype)
    }
}
