use super::aggregate::Project;
use once_cell::sync::Lazy;

static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        Project::new(
            1,
            "Realtime Face Recognition Attendance System",
            "Developed a real-time facial recognition system for automated attendance tracking. The system uses high-accuracy face recognition to mark attendance under varying lighting conditions, integrating with Firebase for secure data storage and real-time updates. Features include a web interface for course selection, live video processing with visual feedback, and downloadable Excel reports for attendance records.",
            &["OpenCV", "Firebase", "Python", "Face Recognition", "Flask", "React", "Axios", "FaceNet"],
            "/images/faceAttendance.JPG",
            "Computer Vision",
            Some("https://github.com/amiraijaz/Realtime-FaceRecognition-Attendance-System"),
        ),
        Project::new(
            2,
            "AI Medical Chatbot (with Vision and Voice)",
            "Multimodal medical assistant that can analyze medical images, answer health questions, and provide voice interactions using LLMs and computer vision.",
            &["LLaMA 3", "OpenAI API", "Computer Vision", "Speech Recognition", "Flask"],
            "/images/medChatbot.png",
            "AI Healthcare",
            Some("https://github.com/amiraijaz/Medical-Chatbot"),
        ),
        Project::new(
            3,
            "Gesture-Based Calculator",
            "A real-time hand gesture recognition system that allows users to perform basic arithmetic operations (addition, subtraction, multiplication, division) using finger movements. The calculator interface is displayed on-screen, with buttons selectable via index finger and thumb proximity, processed through a webcam feed for seamless interaction.",
            &["MediaPipe", "Python", "OpenCV", "CVZone"],
            "/images/calculator.JPG",
            "Computer Vision",
            Some("https://github.com/amiraijaz/Gesture-Based-Calculator"),
        ),
        Project::new(
            4,
            "UK License Plate Recognition using OCR",
            "A real-time detection and recognition system tailored for UK license plates. Utilizes YOLOv8 to detect vehicles and isolate license plates with high accuracy, followed by OCR to extract plate numbers. Features include vehicle tracking, zoomed-in plate visualization, and CSV output for detection results, ensuring efficient processing of video streams under various conditions.",
            &["YOLOv8", "OpenCV", "Tesseract OCR", "SORT Algorithm", "NumPy", "Python"],
            "/images/licensePlate.jpg",
            "Computer Vision",
            Some("https://github.com/amiraijaz/UK-License-Plate-Detection"),
        ),
        Project::new(
            5,
            "Text-to-SQL System using LLaMA 3",
            "A Streamlit-based web application that converts natural language questions into SQL queries using Groq’s LLaMA 3 model. The system queries a local SQLite database (student.db) in real-time, delivering results through an intuitive UI. Features secure API key management with .env and seamless interaction for users to explore data effortlessly.",
            &["LLaMA 3", "Groq API", "LangChain", "Streamlit", "SQLite", "Python-dotenv", "Python"],
            "/images/tts.JPG",
            "Natural Language Processing",
            Some("https://github.com/amiraijaz/Text-To-SQL-"),
        ),
        Project::new(
            6,
            "Visual Question Answering with ViLT",
            "A Visual Question Answering (VQA) system powered by the ViLT model (dandelin/vilt-b32-finetuned-vqa), deployed through a user-friendly Streamlit web app. Users can upload JPG/PNG images and ask natural language questions, receiving real-time AI-generated answers based on advanced image-text understanding.",
            &["ViLT", "Hugging Face Transformers", "Streamlit", "PyTorch", "Python"],
            "/images/ViLT.jpg",
            "Vision and Language",
            Some("https://github.com/amiraijaz/Visual-Question-Answering-System"),
        ),
        Project::new(
            7,
            "Sign Language Translator",
            "A real-time sign language recognition system that interprets gestures using MediaPipe Holistic for keypoint detection (face, pose, hands) and an LSTM neural network for classifying custom gestures like “Good morning” and “How are you”. Features include video capture, dynamic dataset organization, and sequence data preparation, with an extensible framework for adding new signs.",
            &["MediaPipe", "TensorFlow", "Keras", "OpenCV", "NumPy", "Matplotlib", "Python"],
            "/images/signLanguage.JPG",
            "Computer Vision",
            Some("https://github.com/amiraijaz/Sign-Language-Translator"),
        ),
        Project::new(
            8,
            "YouTube to Blog & Podcast Generator",
            "An automated system that transforms YouTube videos into blog posts and podcasts. It fetches video transcripts, generates summarized blogs and keywords using AI, processes audio for podcasts, and uploads content to Google Drive while saving metadata to Google Sheets. The system ensures efficiency by skipping previously processed videos, with robust logging for debugging.",
            &["OpenAI API", "YouTubeTranscriptApi", "yt-dlp", "pydub", "gspread", "Google Drive API", "Pydantic", "Python"],
            "/images/youtubeContent.JPG",
            "Content Automation",
            Some("https://github.com/amiraijaz/youtube-to-blog-podcast"),
        ),
        Project::new(
            9,
            "AI-Generated Newsletter",
            "A Django-based system that generates professional, location-specific newsletters in an Axios-style format, powered by Anthropic’s Claude model. It fetches recent articles via the Perplexity API, curates content across topics like real estate, events, and dining, and structures output in HTML with introductions, fun facts, and conclusions. Features include dynamic topic selection, verified data from the past week, and Realtor-focused insights for community engagement.",
            &["Claude API", "Perplexity API", "Django", "Python", "Pydantic", "Requests", "HTML"],
            "/images/ai newsletter.JPG",
            "Content Automation",
            Some("https://github.com/amiraijaz/ai-newsletter"),
        ),
        Project::new(
            10,
            "Plaque Segmentation",
            "A medical imaging system that uses YOLOv8 to segment arterial plaque in ultrasound images with high precision. It processes images in real-time, annotates plaque regions with confidence scores, and supports visualization of results, aiding in cardiovascular diagnostics.",
            &["YOLOv8", "PyTorch", "OpenCV", "NumPy", "Matplotlib", "Python"],
            "/images/plaqueSegment.png",
            "Medical AI",
            Some("https://github.com/amiraijaz/Plaque-Segmentation"),
        ),
        Project::new(
            11,
            "Fog Removal for Autonomous Vehicles",
            "A Streamlit-based computer vision system that enhances visibility in foggy conditions for autonomous vehicles. It uses YOLOv8 for object detection (pedestrians, cars, trucks, signals) and advanced preprocessing techniques like dark channel prior and CLAHE to dehaze video frames in real-time.",
            &["YOLOv8", "OpenCV", "Streamlit", "PyTorch", "NumPy", "Python"],
            "/images/fog.jpg",
            "Computer Vision",
            Some("https://github.com/amiraijaz/Fog-Removal-for-Autonomous-Vehicles"),
        ),
        Project::new(
            12,
            "Instagram Agent",
            "An AI-powered automation system built with CrewAI to create and manage Instagram content. It conducts market research, strategizes content, generates visuals, and writes captions, streamlining social media engagement with a sequential task workflow.",
            &["CrewAI", "LangChain", "Python", "Serper API", "WebBaseLoader"],
            "/images/agentInsta.jpg",
            "Automation",
            Some("https://github.com/amiraijaz/Insta-Agent"),
        ),
    ]
});

/// The static project catalog, in display order.
pub fn projects() -> &'static [Project] {
    PROJECTS.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = projects().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn test_catalog_is_stable_across_calls() {
        assert!(std::ptr::eq(projects(), projects()));
        assert_eq!(projects().len(), 12);
    }
}
