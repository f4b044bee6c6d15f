use rusqlite::{Connection, Result};
use tempfile::NamedTempFile;

// Initialize the club schema with a small, hand-checked data set
pub fn initialize_fixture(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE Facilities (
            facid INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            membercost REAL NOT NULL,
            guestcost REAL NOT NULL,
            initialoutlay INTEGER NOT NULL,
            monthlymaintenance INTEGER NOT NULL
        );
        CREATE TABLE Members (
            memid INTEGER PRIMARY KEY,
            surname TEXT NOT NULL,
            firstname TEXT NOT NULL,
            recommendedby INTEGER
        );
        CREATE TABLE Bookings (
            bookid INTEGER PRIMARY KEY,
            facid INTEGER NOT NULL,
            memid INTEGER NOT NULL,
            starttime TEXT NOT NULL,
            slots INTEGER NOT NULL
        );

        INSERT INTO Facilities VALUES (0, 'Tennis Court 1', 5, 25, 10000, 200);
        INSERT INTO Facilities VALUES (1, 'Tennis Court 2', 5, 25, 8000, 200);
        INSERT INTO Facilities VALUES (2, 'Badminton Court', 0, 15.5, 4000, 50);
        INSERT INTO Facilities VALUES (3, 'Table Tennis', 0, 5, 320, 10);
        INSERT INTO Facilities VALUES (4, 'Squash Court', 3.5, 17.5, 5000, 80);
        INSERT INTO Facilities VALUES (5, 'Massage Room 1', 10, 80, 4000, 3000);

        INSERT INTO Members VALUES (0, 'GUEST', 'GUEST', NULL);
        INSERT INTO Members VALUES (1, 'Smith', 'Darren', NULL);
        INSERT INTO Members VALUES (2, 'Smith', 'Tracy', '');
        INSERT INTO Members VALUES (3, 'Rownam', 'Tim', 0);
        INSERT INTO Members VALUES (4, 'Joplette', 'Janice', 1);
        INSERT INTO Members VALUES (5, 'Butters', 'Gerald', 1);
        INSERT INTO Members VALUES (6, 'Baker', 'Anne', 5);

        INSERT INTO Bookings (facid, memid, starttime, slots) VALUES
            (0, 0, '2012-07-03 09:00:00', 2),
            (0, 1, '2012-07-10 10:00:00', 3),
            (0, 1, '2012-07-20 11:30:00', 1),
            (0, 4, '2012-08-05 08:00:00', 2),
            (1, 0, '2012-09-01 12:00:00', 50),
            (1, 5, '2012-09-02 13:00:00', 4),
            (2, 0, '2012-07-15 14:00:00', 6),
            (2, 2, '2012-08-01 15:00:00', 9),
            (2, 3, '2012-08-20 16:00:00', 3),
            (3, 0, '2012-09-11 17:00:00', 4),
            (5, 0, '2012-07-01 18:00:00', 12),
            (5, 6, '2012-09-30 19:00:00', 4);
        "#,
    )
}

// Helper function to create a temporary file-based fixture database
pub fn create_fixture_db() -> Result<NamedTempFile> {
    let temp_file = NamedTempFile::new().unwrap();
    let conn = Connection::open(temp_file.path())?;
    initialize_fixture(&conn)?;
    conn.close().map_err(|(_, e)| e)?;
    Ok(temp_file)
}
