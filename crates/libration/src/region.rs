use std::fmt;

/// A segment of the axis through the primaries holding one collinear point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Beyond the larger primary, `x < -u2`. Holds L3.
    FarSide,

    /// Between the primaries, `-u2 < x < u1`. Holds L1.
    Between,

    /// Beyond the smaller primary, `x > u1`. Holds L2.
    Beyond,
}

impl Region {
    /// All regions in axis order.
    pub const ALL: [Region; 3] = [Region::FarSide, Region::Between, Region::Beyond];

    /// Conventional name of the libration point in this region.
    #[must_use]
    pub fn point_name(self) -> &'static str {
        match self {
            Region::FarSide => "L3",
            Region::Between => "L1",
            Region::Beyond => "L2",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.point_name())
    }
}
