//! The five fixed reports, in the order they are run.

use std::io::Write;

use tracing::{debug, info};

use crate::error::{ReportError, Result};
use crate::render::{write_report, OutputFormat};
use crate::sqlite::{ReportDatabase, ReportTable};

/// Facilities earning at least this much are left out of the revenue report.
pub const REVENUE_THRESHOLD: i64 = 1000;

/// Member id used for guest bookings.
pub const GUEST_MEMBER_ID: i64 = 0;

const LIST_FACILITIES_SQL: &str = r#"
    SELECT *
    FROM Facilities
    ORDER BY facid
"#;

fn facility_revenue_sql() -> String {
    format!(
        r#"
    SELECT sum(costs.cost) AS total_revenue, costs.fname AS facility
    FROM (
        SELECT f.facid AS id, f.name AS fname,
            CASE
                WHEN b.memid = {guest} THEN b.slots * f.guestcost
                WHEN b.memid > {guest} THEN b.slots * f.membercost
            END AS cost
        FROM Bookings AS b
        LEFT JOIN Facilities AS f ON b.facid = f.facid
    ) AS costs
    GROUP BY costs.id
    HAVING total_revenue < {threshold}
    ORDER BY total_revenue DESC
"#,
        guest = GUEST_MEMBER_ID,
        threshold = REVENUE_THRESHOLD,
    )
}

// recommendedby may hold NULL, '' or the guest id for "no recommender"; the
// lookup yields NULL for the first two and the guest id is screened out directly.
fn member_recommenders_sql() -> String {
    format!(
        r#"
    SELECT member, recommendedby
    FROM (
        SELECT a.surname || ', ' || a.firstname AS member,
            (
                SELECT r.surname || ', ' || r.firstname
                FROM Members AS r
                WHERE r.memid = a.recommendedby
            ) AS recommendedby,
            a.surname AS surname,
            a.firstname AS firstname
        FROM Members AS a
        WHERE a.memid <> {guest}
            AND a.recommendedby <> {guest}
    )
    WHERE recommendedby IS NOT NULL
    ORDER BY surname, firstname
"#,
        guest = GUEST_MEMBER_ID,
    )
}

fn facility_usage_sql() -> String {
    format!(
        r#"
    SELECT f.name AS name, sum(b.slots) AS slots
    FROM Facilities AS f
    INNER JOIN Bookings AS b USING (facid)
    WHERE b.memid <> {guest}
    GROUP BY f.facid
    ORDER BY f.facid
"#,
        guest = GUEST_MEMBER_ID,
    )
}

fn facility_usage_by_month_sql() -> String {
    format!(
        r#"
    SELECT f.name AS name, sum(b.slots) AS slots, strftime('%m', b.starttime) AS month
    FROM Facilities AS f
    INNER JOIN Bookings AS b USING (facid)
    WHERE b.memid <> {guest}
    GROUP BY f.facid, strftime('%m', b.starttime)
    ORDER BY f.facid, month
"#,
        guest = GUEST_MEMBER_ID,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    ListFacilities,
    FacilityRevenue,
    MemberRecommenders,
    FacilityUsage,
    FacilityUsageByMonth,
}

impl Report {
    /// Every report, in run order.
    pub const ALL: [Report; 5] = [
        Report::ListFacilities,
        Report::FacilityRevenue,
        Report::MemberRecommenders,
        Report::FacilityUsage,
        Report::FacilityUsageByMonth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Report::ListFacilities => "Query all facilities",
            Report::FacilityRevenue => "Get total revenue",
            Report::MemberRecommenders => "Get member by recommender name",
            Report::FacilityUsage => "Get facility usage for members",
            Report::FacilityUsageByMonth => "Get facility usage for members by month",
        }
    }

    pub fn sql(self) -> String {
        match self {
            Report::ListFacilities => LIST_FACILITIES_SQL.to_string(),
            Report::FacilityRevenue => facility_revenue_sql(),
            Report::MemberRecommenders => member_recommenders_sql(),
            Report::FacilityUsage => facility_usage_sql(),
            Report::FacilityUsageByMonth => facility_usage_by_month_sql(),
        }
    }

    /// Execute the report and fetch all of its rows.
    pub fn run(self, db: &ReportDatabase) -> Result<ReportTable> {
        debug!(report = self.label(), "running report");
        db.query(&self.sql()).map_err(|source| ReportError::Query {
            report: self.label(),
            source,
        })
    }
}

pub fn list_facilities(db: &ReportDatabase) -> Result<ReportTable> {
    Report::ListFacilities.run(db)
}

pub fn facility_revenue(db: &ReportDatabase) -> Result<ReportTable> {
    Report::FacilityRevenue.run(db)
}

pub fn member_recommenders(db: &ReportDatabase) -> Result<ReportTable> {
    Report::MemberRecommenders.run(db)
}

pub fn facility_usage(db: &ReportDatabase) -> Result<ReportTable> {
    Report::FacilityUsage.run(db)
}

pub fn facility_usage_by_month(db: &ReportDatabase) -> Result<ReportTable> {
    Report::FacilityUsageByMonth.run(db)
}

/// Run every report in order, writing each one as soon as it completes.
///
/// Stops at the first failing report; earlier output stays written.
pub fn run_all<W: Write>(db: &ReportDatabase, format: OutputFormat, out: &mut W) -> Result<()> {
    for (idx, report) in Report::ALL.into_iter().enumerate() {
        let table = report.run(db)?;
        write_report(out, idx + 1, report.label(), &table, format)?;
    }
    out.flush()?;
    info!(reports = Report::ALL.len(), "all reports written");
    Ok(())
}
