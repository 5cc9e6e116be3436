use super::TagValue::{self, Integer, Real, Text};

/// Shared timestamp for every date tag
pub const CAPTURE_TIME: &str = "2025:07:25 12:00:00";

/// Camera and image description tags, written before the pixel dimensions
pub static EXIF_TAGS: [(&str, TagValue); 11] = [
    ("AllDates", Text(CAPTURE_TIME)),
    ("DateTimeOriginal", Text(CAPTURE_TIME)),
    ("DateTimeDigitized", Text(CAPTURE_TIME)),
    ("ImageDescription", Text("Test image for EXIF/GPS extraction")),
    ("Make", Text("TestCamera")),
    ("Model", Text("TestModel 1.0")),
    ("Software", Text("ImageInfoTest")),
    ("Copyright", Text("(C) 2025 Example")),
    ("UserComment", Text("Test comment for EXIF extraction")),
    ("FlashpixVersion", Text("0100")),
    ("ColorSpace", Text("sRGB")),
];

// Tokyo, decimal degrees
pub static GPS_TAGS: [(&str, TagValue); 20] = [
    ("GPSLatitudeRef", Text("N")),
    ("GPSLatitude", Real(35.6895)),
    ("GPSLongitudeRef", Text("E")),
    ("GPSLongitude", Real(139.6917)),
    ("GPSAltitudeRef", Text("0")),
    ("GPSAltitude", Integer(44)),
    ("GPSTimeStamp", Text("12:00:00")),
    ("GPSSatellites", Text("U")),
    ("GPSStatus", Text("A")),
    ("GPSMeasureMode", Text("2")),
    ("GPSDOP", Integer(1)),
    ("GPSSpeedRef", Text("K")),
    ("GPSSpeed", Integer(0)),
    ("GPSTrackRef", Text("T")),
    ("GPSTrack", Integer(0)),
    ("GPSImgDirectionRef", Text("T")),
    ("GPSImgDirection", Integer(0)),
    ("GPSMapDatum", Text("WGS-84")),
    ("GPSDateStamp", Text("2025:07:25")),
    ("GPSDifferential", Text("0")),
];
