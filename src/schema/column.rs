use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Columns of the YoMaHa'07 trajectory file, in file order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumString, IntoStaticStr, EnumIter, Display)]
#[allow(missing_docs)]
pub enum Column {
    // Deep velocity estimates
    #[strum(serialize = "lon_d")]
    LonD,
    #[strum(serialize = "lat_d")]
    LatD,
    #[strum(serialize = "p_d")]
    PressureD,
    #[strum(serialize = "t_d")]
    TimeD,
    #[strum(serialize = "u_d")]
    UD,
    #[strum(serialize = "v_d")]
    VD,
    #[strum(serialize = "eu_d")]
    ErrUD,
    #[strum(serialize = "ev_d")]
    ErrVD,

    // Surface velocity estimates
    #[strum(serialize = "lon_s")]
    LonS,
    #[strum(serialize = "lat_s")]
    LatS,
    #[strum(serialize = "t_s")]
    TimeS,
    #[strum(serialize = "u_s")]
    US,
    #[strum(serialize = "v_s")]
    VS,
    #[strum(serialize = "eu_s")]
    ErrUS,
    #[strum(serialize = "ev_s")]
    ErrVS,

    // Last surface fix of the previous cycle
    #[strum(serialize = "lon_lp")]
    LonLp,
    #[strum(serialize = "lat_lp")]
    LatLp,
    #[strum(serialize = "t_lp")]
    TimeLp,

    // First surface fix of the current cycle
    #[strum(serialize = "lon_fc")]
    LonFc,
    #[strum(serialize = "lat_fc")]
    LatFc,
    #[strum(serialize = "t_fc")]
    TimeFc,

    // Last surface fix of the current cycle
    #[strum(serialize = "lon_lc")]
    LonLc,
    #[strum(serialize = "lat_lc")]
    LatLc,
    #[strum(serialize = "t_lc")]
    TimeLc,
    #[strum(serialize = "s_fix")]
    SurfaceFixes,

    // Identity and quality
    #[strum(serialize = "id")]
    FloatId,
    #[strum(serialize = "cycle")]
    Cycle,
    #[strum(serialize = "t_inv")]
    TimeInversion,
}

/// Semantic grouping of the columns.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Cluster {
    /// Velocity at the parking depth.
    DeepVelocity,
    /// Velocity at the sea surface.
    SurfaceVelocity,
    /// Surface fixes bracketing the cycle.
    Auxiliary,
    /// Float id, cycle number and the time inversion flag.
    Identity,
}

/// Physical units of a column.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Units {
    /// Longitude
    DegreesEast,
    /// Latitude
    DegreesNorth,
    /// Parking pressure
    Decibar,
    /// Days since 2000-01-01 00:00 UTC
    JulianDays,
    /// Velocity components and their errors
    CentimetersPerSecond,
    /// A count of events
    Count,
    /// A numeric identifier
    Identifier,
    /// 1 or 0
    Flag,
}

impl Column {
    /// The column name as it appears in the table.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The group of measurements this column belongs to.
    pub fn cluster(self) -> Cluster {
        use Column::*;

        match self {
            LonD | LatD | PressureD | TimeD | UD | VD | ErrUD | ErrVD => Cluster::DeepVelocity,
            LonS | LatS | TimeS | US | VS | ErrUS | ErrVS => Cluster::SurfaceVelocity,
            LonLp | LatLp | TimeLp | LonFc | LatFc | TimeFc | LonLc | LatLc | TimeLc
            | SurfaceFixes => Cluster::Auxiliary,
            FloatId | Cycle | TimeInversion => Cluster::Identity,
        }
    }

    /// Physical units of the values in this column.
    pub fn units(self) -> Units {
        use Column::*;

        match self {
            LonD | LonS | LonLp | LonFc | LonLc => Units::DegreesEast,
            LatD | LatS | LatLp | LatFc | LatLc => Units::DegreesNorth,
            PressureD => Units::Decibar,
            TimeD | TimeS | TimeLp | TimeFc | TimeLc => Units::JulianDays,
            UD | VD | ErrUD | ErrVD | US | VS | ErrUS | ErrVS => Units::CentimetersPerSecond,
            SurfaceFixes => Units::Count,
            FloatId | Cycle => Units::Identifier,
            TimeInversion => Units::Flag,
        }
    }

    /// A human readable description.
    pub fn description(self) -> &'static str {
        use Column::*;

        match self {
            LonD => "deep velocity longitude",
            LatD => "deep velocity latitude",
            PressureD => "parking pressure for this cycle",
            TimeD => "deep velocity time",
            UD => "deep zonal velocity",
            VD => "deep meridional velocity",
            ErrUD => "error of the deep zonal velocity",
            ErrVD => "error of the deep meridional velocity",
            LonS => "surface velocity longitude",
            LatS => "surface velocity latitude",
            TimeS => "surface velocity time",
            US => "surface zonal velocity",
            VS => "surface meridional velocity",
            ErrUS => "error of the surface zonal velocity",
            ErrVS => "error of the surface meridional velocity",
            LonLp => "longitude of the last surface fix of the previous cycle",
            LatLp => "latitude of the last surface fix of the previous cycle",
            TimeLp => "time of the last surface fix of the previous cycle",
            LonFc => "longitude of the first surface fix of the current cycle",
            LatFc => "latitude of the first surface fix of the current cycle",
            TimeFc => "time of the first surface fix of the current cycle",
            LonLc => "longitude of the last surface fix of the current cycle",
            LatLc => "latitude of the last surface fix of the current cycle",
            TimeLc => "time of the last surface fix of the current cycle",
            SurfaceFixes => "number of surface fixes during the current cycle",
            FloatId => "float id",
            Cycle => "cycle number",
            TimeInversion => {
                "1 if a time inversion or duplicate was found in the fixes of this cycle"
            }
        }
    }
}

#[cfg(test)]
mod unit {
    use super::*;

    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_to_string_for_column() {
        assert_eq!(Column::LonD.to_string(), "lon_d");
        assert_eq!(Column::TimeInversion.name(), "t_inv");
    }

    #[test]
    fn test_from_string_for_column() {
        assert_eq!(Column::from_str("eu_s").unwrap(), Column::ErrUS);
        assert!(Column::from_str("not_a_column").is_err());
    }

    #[test]
    fn round_trip_strings_for_column() {
        for column in Column::iter() {
            assert_eq!(Column::from_str(column.name()).unwrap(), column);
        }
    }

    #[test]
    fn test_cluster_sizes() {
        let count = |cluster| Column::iter().filter(|c| c.cluster() == cluster).count();

        assert_eq!(Column::iter().count(), 28);
        assert_eq!(count(Cluster::DeepVelocity), 8);
        assert_eq!(count(Cluster::SurfaceVelocity), 7);
        assert_eq!(count(Cluster::Auxiliary), 10);
        assert_eq!(count(Cluster::Identity), 3);
    }
}
