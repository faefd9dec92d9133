//! The sample ultrasound report used across the test suites.
//!
//! Lines keep their trailing `\n`, as produced by a line-by-line file read.
//! Patient-identifying text is anonymised as `XXX`.

pub const BODY_BEGIN_MARKER: &str = "RENSEIGNEMENT CLINIQUE / CLINICAL INFORMATION";

pub const BODY_END_MARKERS: [&str; 3] = [
    "Case dictated by",
    "Electronically signed by",
    "Dossier/MRN:",
];

pub const BETWEEN_START_MARKERS: [&str; 1] =
    ["Hôpital de Montréal pour Enfants / Montreal Children's Hospital"];

pub const BETWEEN_END_MARKERS: [&str; 1] = ["Rapport/Report"];

/// The 27-line sample report.
pub fn sample_report_lines() -> Vec<&'static str> {
    vec![
        "Centre Universitaire de Santé McGill\n",
        "US US ABDOMEN/PELVIS- APPENDICITIS -AB\n",
        "Date d'examen / Exam Date\n",
        "April 15, 2014 10:28\n",
        "RENSEIGNEMENT CLINIQUE / CLINICAL INFORMATION:\n",
        "XXX.\n",
        "PROTOCOLE RADIOLOGIQUE / RADIOLOGIST'S REPORT:\n",
        "ULTRASOUND OF ABDOMEN AND PELVIS\n",
        "XXX.\n",
        "IMPRESSION:\n",
        "XXX.\n",
        "Hôpital de Montréal pour Enfants / Montreal Children's Hospital\n",
        "1001 boul. Décarie, Montréal, Québec, H4A 3J1\n",
        "Page 1 of 2\n",
        "Centre Universitaire de Santé McGill\n",
        "Rapport/Report:\n",
        "XXX\n",
        " \n",
        " \n",
        "Electronically signed by: XXX\n",
        "Radiologiste/Reporting MD:\n",
        "Date Dictée/Dictated:\n",
        "Transcription par/by:\n",
        "Date de transcription/Date Typed:\n",
        "Hôpital de Montréal pour Enfants / Montreal Children's Hospital\n",
        "1001 boul. Décarie, Montréal, Québec, H4A 3J1\n",
        "Page 2 of 2\n",
    ]
}

/// The sample report as one string, the way it sits in a `.txt` file.
pub fn sample_report_text() -> String {
    sample_report_lines().concat()
}

/// Windowing the sample between [`BODY_BEGIN_MARKER`] and [`BODY_END_MARKERS`].
pub fn expected_window() -> Vec<&'static str> {
    vec![
        "RENSEIGNEMENT CLINIQUE / CLINICAL INFORMATION:\n",
        "XXX.\n",
        "PROTOCOLE RADIOLOGIQUE / RADIOLOGIST'S REPORT:\n",
        "ULTRASOUND OF ABDOMEN AND PELVIS\n",
        "XXX.\n",
        "IMPRESSION:\n",
        "XXX.\n",
        "Hôpital de Montréal pour Enfants / Montreal Children's Hospital\n",
        "1001 boul. Décarie, Montréal, Québec, H4A 3J1\n",
        "Page 1 of 2\n",
        "Centre Universitaire de Santé McGill\n",
        "Rapport/Report:\n",
        "XXX\n",
        " \n",
        " \n",
    ]
}

/// Deleting the letterhead block of the sample with
/// [`BETWEEN_START_MARKERS`] / [`BETWEEN_END_MARKERS`].
pub fn expected_excised() -> Vec<&'static str> {
    vec![
        "Centre Universitaire de Santé McGill\n",
        "US US ABDOMEN/PELVIS- APPENDICITIS -AB\n",
        "Date d'examen / Exam Date\n",
        "April 15, 2014 10:28\n",
        "RENSEIGNEMENT CLINIQUE / CLINICAL INFORMATION:\n",
        "XXX.\n",
        "PROTOCOLE RADIOLOGIQUE / RADIOLOGIST'S REPORT:\n",
        "ULTRASOUND OF ABDOMEN AND PELVIS\n",
        "XXX.\n",
        "IMPRESSION:\n",
        "XXX.\n",
        "XXX\n",
        " \n",
        " \n",
        "Electronically signed by: XXX\n",
        "Radiologiste/Reporting MD:\n",
        "Date Dictée/Dictated:\n",
        "Transcription par/by:\n",
        "Date de transcription/Date Typed:\n",
        "Hôpital de Montréal pour Enfants / Montreal Children's Hospital\n",
        "1001 boul. Décarie, Montréal, Québec, H4A 3J1\n",
        "Page 2 of 2\n",
    ]
}

/// Stripping every line of the sample, then dropping blank lines.
pub fn expected_stripped() -> Vec<&'static str> {
    vec![
        "Centre Universitaire de Santé McGill",
        "US US ABDOMEN/PELVIS- APPENDICITIS -AB",
        "Date d'examen / Exam Date",
        "April 15, 2014 10:28",
        "RENSEIGNEMENT CLINIQUE / CLINICAL INFORMATION:",
        "XXX.",
        "PROTOCOLE RADIOLOGIQUE / RADIOLOGIST'S REPORT:",
        "ULTRASOUND OF ABDOMEN AND PELVIS",
        "XXX.",
        "IMPRESSION:",
        "XXX.",
        "Hôpital de Montréal pour Enfants / Montreal Children's Hospital",
        "1001 boul. Décarie, Montréal, Québec, H4A 3J1",
        "Page 1 of 2",
        "Centre Universitaire de Santé McGill",
        "Rapport/Report:",
        "XXX",
        "Electronically signed by: XXX",
        "Radiologiste/Reporting MD:",
        "Date Dictée/Dictated:",
        "Transcription par/by:",
        "Date de transcription/Date Typed:",
        "Hôpital de Montréal pour Enfants / Montreal Children's Hospital",
        "1001 boul. Décarie, Montréal, Québec, H4A 3J1",
        "Page 2 of 2",
    ]
}

/// Filtering the sample with `.*XXX.*`, `(?i)Page \d of \d` and the
/// literal `Hôpital de Montréal pour Enfants`.
pub fn expected_filtered() -> Vec<&'static str> {
    vec![
        "Centre Universitaire de Santé McGill\n",
        "US US ABDOMEN/PELVIS- APPENDICITIS -AB\n",
        "Date d'examen / Exam Date\n",
        "April 15, 2014 10:28\n",
        "RENSEIGNEMENT CLINIQUE / CLINICAL INFORMATION:\n",
        "PROTOCOLE RADIOLOGIQUE / RADIOLOGIST'S REPORT:\n",
        "ULTRASOUND OF ABDOMEN AND PELVIS\n",
        "IMPRESSION:\n",
        "1001 boul. Décarie, Montréal, Québec, H4A 3J1\n",
        "Centre Universitaire de Santé McGill\n",
        "Rapport/Report:\n",
        " \n",
        " \n",
        "Radiologiste/Reporting MD:\n",
        "Date Dictée/Dictated:\n",
        "Transcription par/by:\n",
        "Date de transcription/Date Typed:\n",
        "1001 boul. Décarie, Montréal, Québec, H4A 3J1\n",
    ]
}

/// The sample's body after the whole ultrasound pipeline, space-joined.
pub const EXPECTED_BODY: &str = "RENSEIGNEMENT CLINIQUE / CLINICAL INFORMATION: XXX. \
PROTOCOLE RADIOLOGIQUE / RADIOLOGIST'S REPORT: ULTRASOUND OF ABDOMEN AND PELVIS XXX. \
IMPRESSION: XXX. XXX";
