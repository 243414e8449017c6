use blood_donation_manager::{
    CampId, CampSummary, DonorId, DonorSummary, RegistryError, Store, ValidationError,
};

fn store() -> Store {
    let store = Store::in_memory().unwrap();
    store.initialize().unwrap();
    store
}

fn add_spring_drive(store: &Store) -> CampId {
    store
        .add_camp("Red Cross", "555-0100", "Spring Drive", "City Hall", "2024-05-01")
        .unwrap()
}

fn count(store: &Store, table: &str) -> i64 {
    store
        .connect()
        .unwrap()
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .unwrap()
}

#[test]
fn camp_then_donor_scenario() {
    let store = store();

    let camp_id = add_spring_drive(&store);
    assert_eq!(camp_id, CampId(1));
    assert_eq!(
        store.list_camps().unwrap(),
        vec![CampSummary {
            id: CampId(1),
            camp_name: "Spring Drive".to_string(),
            location: "City Hall".to_string(),
            date: "2024-05-01".to_string(),
            organizer_name: "Red Cross".to_string(),
        }]
    );

    let donor_id = store
        .add_donor("Jane Doe", "30", "a+", "555-0200", "1")
        .unwrap();
    assert_eq!(donor_id, DonorId(1));
    assert_eq!(
        store.list_donors_by_camp("1").unwrap(),
        vec![DonorSummary {
            id: DonorId(1),
            donor_name: "Jane Doe".to_string(),
            age: 30,
            blood_group: "A+".to_string(),
        }]
    );
}

#[test]
fn each_camp_creates_one_organizer_and_one_camp() {
    let store = store();
    add_spring_drive(&store);
    let second = add_spring_drive(&store);

    assert_eq!(second, CampId(2));
    assert_eq!(count(&store, "Organizers"), 2);
    assert_eq!(count(&store, "Camps"), 2);
}

#[test]
fn camp_dates_are_checked_by_shape_only() {
    let store = store();
    for bad in ["2024/01/01", "01-01-2024"] {
        let err = store
            .add_camp("Red Cross", "555", "Drive", "Hall", bad)
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Validation(ValidationError::InvalidDate)
        ));
    }
    assert!(store.add_camp("Red Cross", "555", "Drive", "Hall", "2024-01-01").is_ok());
    assert!(store.add_camp("Red Cross", "555", "Drive", "Hall", "2024-13-40").is_ok());
}

#[test]
fn blank_camp_fields_are_rejected() {
    let err = store()
        .add_camp("Red Cross", "  ", "Drive", "Hall", "2024-01-01")
        .unwrap_err();
    assert_eq!(err.to_string(), "All camp fields are required");
}

#[test]
fn donor_age_limits() {
    let store = store();
    add_spring_drive(&store);

    for age in ["17", "66"] {
        let err = store.add_donor("Jane", age, "O+", "555", "1").unwrap_err();
        assert_eq!(err.to_string(), "Age must be between 18-65");
    }
    for age in ["18", "65"] {
        assert!(store.add_donor("Jane", age, "O+", "555", "1").is_ok());
    }
}

#[test]
fn rejected_donor_writes_nothing() {
    let store = store();
    add_spring_drive(&store);

    let err = store.add_donor("Jane", "17", "A+", "555", "1").unwrap_err();
    assert!(err.is_validation());
    let err = store
        .add_donor("Jane", "99999999999999999999", "A+", "555", "1")
        .unwrap_err();
    assert_eq!(err.to_string(), "Age must be between 18-65");

    assert_eq!(count(&store, "Donor_Info"), 0);
    assert_eq!(count(&store, "Donations"), 0);
}

#[test]
fn donor_blood_groups() {
    let store = store();
    add_spring_drive(&store);

    let err = store.add_donor("Jane", "30", "AB", "555", "1").unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Validation(ValidationError::InvalidBloodGroup)
    ));

    for group in ["AB+", "O-", "o-"] {
        assert!(store.add_donor("Jane", "30", group, "555", "1").is_ok());
    }
    let groups: Vec<_> = store
        .list_donors_by_camp("1")
        .unwrap()
        .into_iter()
        .map(|donor| donor.blood_group)
        .collect();
    assert_eq!(groups, vec!["AB+", "O-", "O-"]);
}

#[test]
fn donor_validation_messages() {
    let store = store();
    let err = store.add_donor("Jane", "", "A+", "555", "1").unwrap_err();
    assert_eq!(err.to_string(), "All donor fields are required");

    let err = store.add_donor("Jane", "thirty", "A+", "555", "1").unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Validation(ValidationError::NotAnInteger { field: "Age", .. })
    ));
}

#[test]
fn donor_for_missing_camp_leaves_nothing_behind() {
    let store = store();
    add_spring_drive(&store);

    let err = store.add_donor("Jane", "30", "A+", "555", "2").unwrap_err();
    assert!(matches!(err, RegistryError::ReferentialIntegrity(_)));
    assert_eq!(count(&store, "Donor_Info"), 0);
    assert_eq!(count(&store, "Donations"), 0);
}

#[test]
fn camps_without_donations_list_empty() {
    let store = store();
    add_spring_drive(&store);

    assert!(store.list_donors_by_camp("1").unwrap().is_empty());
    assert!(store.list_donors_by_camp("404").unwrap().is_empty());
    assert!(matches!(
        store.list_donors_by_camp("one").unwrap_err(),
        RegistryError::Validation(ValidationError::InvalidCampId)
    ));
}

#[test]
fn donors_only_appear_under_their_camp() {
    let store = store();
    add_spring_drive(&store);
    store
        .add_camp("Blood Bank", "555-0300", "Autumn Drive", "Library", "2024-10-01")
        .unwrap();

    store.add_donor("Jane", "30", "A+", "555", "1").unwrap();
    store.add_donor("John", "40", "B-", "556", "2").unwrap();

    let names = |camp: &str| -> Vec<String> {
        store
            .list_donors_by_camp(camp)
            .unwrap()
            .into_iter()
            .map(|donor| donor.donor_name)
            .collect()
    };
    assert_eq!(names("1"), vec!["Jane"]);
    assert_eq!(names("2"), vec!["John"]);
}

#[test]
fn file_store_survives_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blood_donation.db");

    {
        let store = Store::open(&path).unwrap();
        store.initialize().unwrap();
        add_spring_drive(&store);
        store.add_donor("Jane Doe", "30", "A+", "555", "1").unwrap();
    }

    let store = Store::open(&path).unwrap();
    store.initialize().unwrap();
    assert_eq!(store.list_camps().unwrap().len(), 1);
    assert_eq!(store.list_donors_by_camp("1").unwrap().len(), 1);

    // Ids keep counting after a reopen.
    assert_eq!(add_spring_drive(&store), CampId(2));
}

#[test]
fn file_store_enforces_foreign_keys_on_every_connection() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("fk.db")).unwrap();
    store.initialize().unwrap();

    let err = store
        .connect()
        .unwrap()
        .execute(
            "INSERT INTO Camps (camp_name, location, date, organizer_id) VALUES ('a', 'b', 'c', 9)",
            [],
        )
        .map_err(RegistryError::from)
        .unwrap_err();
    assert!(matches!(err, RegistryError::ReferentialIntegrity(_)));
}
